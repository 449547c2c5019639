use thiserror::Error;

use sentira_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Configuration(#[from] InstrumentError),

    /// The computed score matched no configured risk band. A data-integrity
    /// error; never coerced to a default band.
    #[error("score {score} falls outside every risk band of config '{config}'")]
    ScoreOutOfRange { score: f64, config: String },

    #[error("config '{0}' uses the custom method but no custom rule was supplied")]
    MissingCustomRule(String),

    #[error("unknown response '{0}'")]
    UnknownResponse(String),

    #[error("response store error: {0}")]
    Store(String),
}
