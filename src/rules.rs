use crate::error::SimError;

/// Rules defining the dynamical system. Standard Conway is B3/S23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Bitmask: bit `i` set means a dead cell with `i` neighbors becomes alive.
    pub birth: u32,
    /// Bitmask: bit `i` set means a live cell with `i` neighbors survives.
    pub survival: u32,
}

impl RuleSet {
    /// Standard Conway's Game of Life: B3/S23
    pub fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// HighLife: B36/S23 - known for its replicator pattern
    pub fn highlife() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6),
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// Day & Night: B3678/S34678 - symmetric under on/off inversion
    pub fn day_and_night() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6) | (1 << 7) | (1 << 8),
            survival: (1 << 3) | (1 << 4) | (1 << 6) | (1 << 7) | (1 << 8),
        }
    }

    /// Seeds: B2/S (no survival) - every cell dies, only birth
    pub fn seeds() -> Self {
        Self {
            birth: 1 << 2,
            survival: 0,
        }
    }

    /// Life without Death: B3/S012345678 - cells never die
    pub fn life_without_death() -> Self {
        Self {
            birth: 1 << 3,
            survival: 0x1FF, // bits 0-8 all set
        }
    }

    /// Look up a rule set by its registered name. Unknown names are a
    /// configuration error, fatal at setup time.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        REGISTRY
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| f())
            .ok_or_else(|| SimError::Config(format!("unknown rule set: {name}")))
    }

    /// Registered rule-set names, in registry order.
    pub fn names() -> Vec<&'static str> {
        REGISTRY.iter().map(|(n, _)| *n).collect()
    }

    /// Evaluate the rule for one cell: `neighbors` live Moore neighbors
    /// (0-8) and the cell's current state. Total over that domain.
    pub fn next_state(&self, neighbors: u32, alive: bool) -> bool {
        if alive {
            (self.survival >> neighbors) & 1 == 1
        } else {
            (self.birth >> neighbors) & 1 == 1
        }
    }

    /// Render the rule in B/S notation, e.g. "B3/S23".
    pub fn label(&self) -> String {
        let fmt = |mask: u32| -> String {
            (0..=8u32)
                .filter(|&i| (mask >> i) & 1 == 1)
                .map(|i| i.to_string())
                .collect()
        };
        format!("B{}/S{}", fmt(self.birth), fmt(self.survival))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

/// Name → constructor registry. Adding a rule set means adding one
/// constructor above and one entry here; the stepper and grid never change.
const REGISTRY: &[(&str, fn() -> RuleSet)] = &[
    ("conway", RuleSet::conway),
    ("highlife", RuleSet::highlife),
    ("day_and_night", RuleSet::day_and_night),
    ("seeds", RuleSet::seeds),
    ("life_without_death", RuleSet::life_without_death),
];
