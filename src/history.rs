use std::collections::VecDeque;

/// Maximum number of population samples retained for the trend view.
const MAX_HISTORY: usize = 100;

/// One retained population sample with its absolute generation number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub generation: u64,
    pub population: u64,
}

/// Rolling log of per-generation population counts.
///
/// Ring buffer capped at the latest 100 samples; older samples are dropped
/// oldest-first. Display-only: never persisted with the simulation state.
#[derive(Debug, Default)]
pub struct History {
    samples: VecDeque<u64>,
}

impl History {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_HISTORY),
        }
    }

    /// Record a population sample for the generation just completed.
    pub fn record(&mut self, population: u64) {
        if self.samples.len() >= MAX_HISTORY {
            self.samples.pop_front();
        }
        self.samples.push_back(population);
    }

    /// Drop all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Retained samples in chronological order, each tagged with its
    /// absolute generation number. The newest sample belongs to
    /// `current_generation`, so the oldest retained one is
    /// `current_generation - len + 1`.
    pub fn samples(&self, current_generation: u64) -> Vec<Sample> {
        let len = self.samples.len() as u64;
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &population)| Sample {
                generation: current_generation - len + 1 + i as u64,
                population,
            })
            .collect()
    }

    /// The most recent population sample, if any.
    pub fn latest(&self) -> Option<u64> {
        self.samples.back().copied()
    }
}
