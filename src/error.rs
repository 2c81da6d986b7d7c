use thiserror::Error;

/// Errors surfaced by the simulation engine.
#[derive(Debug, Error)]
pub enum SimError {
    /// Setup-time configuration problem (unknown rule or pattern name,
    /// dimensions outside the supported range). Fatal to the operation;
    /// simulation state is unchanged.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed persisted state. The load is rejected and the prior
    /// state retained.
    #[error("validation error: {0}")]
    Validation(String),

    /// Filesystem failure at the save/load boundary.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
