use thiserror::Error;

use sentira_core::error::CoreError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    /// No mapping for the questionnaire. Never substituted with another
    /// questionnaire's configuration.
    #[error("no scoring configuration found for questionnaire '{0}'")]
    ConfigurationNotFound(String),

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error(transparent)]
    InvalidConfig(#[from] CoreError),
}
