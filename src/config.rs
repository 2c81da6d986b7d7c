use serde::Deserialize;

/// Engine configuration.
///
/// All values have defaults so collaborators can construct one directly or
/// deserialize a partial record from a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid rows; clamped to the supported range at controller setup.
    pub rows: usize,
    /// Grid columns; clamped to the supported range at controller setup.
    pub cols: usize,
    /// Registered rule-set name.
    pub rule: String,
    /// Wall-clock interval between automatic ticks, in milliseconds. Soft:
    /// the ticker sleeps this long between steps, no real-time guarantee.
    pub interval_ms: u64,
    /// Default live-cell density for randomize (0.0 = empty, 1.0 = full).
    pub density: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            rule: "conway".to_string(),
            interval_ms: 100,
            density: 0.3,
        }
    }
}
