use thiserror::Error;

/// Error type for the engine's fallible edges (export IO/serialization).
///
/// Nothing in the analytics path itself is fallible: malformed records are
/// screened out by the validator as data, and degenerate numeric inputs
/// always produce defined results.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
