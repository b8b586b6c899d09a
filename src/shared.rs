use thiserror::Error;

/// Infrastructure failures. Rejected intents are not errors at this level: they are
/// reported as `LogError` commands by the tournament effects.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Race text error: {0}")]
    RaceText(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
