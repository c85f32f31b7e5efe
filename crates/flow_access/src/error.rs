use membership_names::ChainQueryError;
use thiserror::Error;

/// Errors that can occur when executing scripts against a Flow Access node.
#[derive(Debug, Error)]
pub enum FlowAccessError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("access node error (status {status}): {message}")]
    Server { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported cadence value type: {0}")]
    UnsupportedCadence(String),
}

impl FlowAccessError {
    pub(crate) fn parse_error(msg: impl Into<String>) -> Self {
        FlowAccessError::Parse(msg.into())
    }
}

impl From<FlowAccessError> for ChainQueryError {
    fn from(value: FlowAccessError) -> Self {
        match &value {
            // Script panics and invalid arguments come back as 4xx.
            FlowAccessError::Server { status, .. } if (400..500).contains(status) => {
                ChainQueryError::ScriptFailed(value.to_string())
            }
            FlowAccessError::Parse(_) | FlowAccessError::UnsupportedCadence(_) => {
                ChainQueryError::Decode(value.to_string())
            }
            _ => ChainQueryError::Transport(value.to_string()),
        }
    }
}
