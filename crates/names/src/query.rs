use crate::errors::ChainQueryError;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Cadence type tag of a script argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CadenceType {
    String,
    Address,
    UInt64,
    UFix64,
}

/// Typed script argument. Serializes as a JSON-Cadence value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CadenceArgument {
    #[serde(rename = "type")]
    pub kind: CadenceType,
    pub value: String,
}

impl CadenceArgument {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: CadenceType::String,
            value: value.into(),
        }
    }
}

/// Read-only script execution against the chain.
///
/// Implementations return the decoded result as plain JSON: optionals are
/// unwrapped (`nil` becomes `null`), composites become objects keyed by field
/// name and numbers keep their exact decimal text.
#[async_trait]
pub trait ChainQuery: Send + Sync {
    async fn execute_script(
        &self,
        script: &str,
        args: &[CadenceArgument],
    ) -> Result<Value, ChainQueryError>;
}

/// Script execution captured by [`StubChainQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub script: String,
    pub args: Vec<CadenceArgument>,
}

/// Stub implementation answering by the first argument's value.
///
/// Arguments without a configured response yield `null`, i.e. "not found".
#[derive(Clone, Default)]
pub struct StubChainQuery {
    responses: Arc<Mutex<HashMap<String, Result<Value, ChainQueryError>>>>,
    calls: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl StubChainQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, argument: impl Into<String>, value: Value) {
        self.responses.lock().insert(argument.into(), Ok(value));
    }

    pub fn fail(&self, argument: impl Into<String>, error: ChainQueryError) {
        self.responses.lock().insert(argument.into(), Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ChainQuery for StubChainQuery {
    async fn execute_script(
        &self,
        script: &str,
        args: &[CadenceArgument],
    ) -> Result<Value, ChainQueryError> {
        self.calls.lock().push(RecordedQuery {
            script: script.to_owned(),
            args: args.to_vec(),
        });

        let key = args.first().map(|arg| arg.value.as_str()).unwrap_or_default();
        self.responses
            .lock()
            .get(key)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }
}
