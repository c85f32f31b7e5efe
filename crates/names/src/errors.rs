//! Error types for name resolution

use thiserror::Error;

/// Failure reported by a [`ChainQuery`](crate::ChainQuery) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainQueryError {
    #[error("chain transport error: {0}")]
    Transport(String),

    #[error("script execution failed: {0}")]
    ScriptFailed(String),

    #[error("failed to decode script result: {0}")]
    Decode(String),
}

/// Why a single registry lookup produced no record.
///
/// Only [`NameLookupError::InapplicableSuffix`] is a purely local outcome;
/// every other variant means a query was attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameLookupError {
    #[error("{name} is not a {suffix} name")]
    InapplicableSuffix { name: String, suffix: &'static str },

    #[error("chain query failed: {0}")]
    Query(#[from] ChainQueryError),

    #[error("name not registered: {name}")]
    NotRegistered { name: String },

    #[error("malformed registry record: {0}")]
    MalformedRecord(String),
}

impl NameLookupError {
    /// True when the lookup was skipped without touching the chain.
    pub fn is_inapplicable(&self) -> bool {
        matches!(self, NameLookupError::InapplicableSuffix { .. })
    }
}

impl From<serde_json::Error> for NameLookupError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedRecord(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NameLookupError>;
