//! Flow Access REST client for read-only Cadence scripts.

pub mod cadence;
mod error;

pub use crate::error::FlowAccessError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use membership_names::{CadenceArgument, ChainQuery, ChainQueryError};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Client for the script endpoint of a Flow Access node
/// (e.g. `https://rest-mainnet.onflow.org`).
#[derive(Clone, Debug)]
pub struct FlowAccessClient {
    base_url: Url,
    http: Client,
}

impl FlowAccessClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, FlowAccessError> {
        Self::with_http_client(
            base_url,
            Client::builder().timeout(Duration::from_secs(10)).build()?,
        )
    }

    /// Use an existing reqwest client (useful for custom TLS or middleware).
    pub fn with_http_client(
        base_url: impl AsRef<str>,
        http: Client,
    ) -> Result<Self, FlowAccessError> {
        let mut url = Url::parse(base_url.as_ref())
            .map_err(|_| FlowAccessError::InvalidBaseUrl(base_url.as_ref().to_string()))?;
        if !url.path().ends_with('/') {
            let mut path = url.path().trim_end_matches('/').to_owned();
            path.push('/');
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute a script against the latest sealed block and return the raw
    /// JSON-Cadence result.
    pub async fn execute_script_at_latest_block(
        &self,
        script: &str,
        args: &[CadenceArgument],
    ) -> Result<Value, FlowAccessError> {
        let arguments = args
            .iter()
            .map(|arg| serde_json::to_vec(arg).map(|json| STANDARD.encode(json)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| FlowAccessError::parse_error(err.to_string()))?;
        let body = ScriptRequest {
            script: STANDARD.encode(script),
            arguments,
        };

        let mut url = self.base_url.join("v1/scripts")?;
        url.query_pairs_mut().append_pair("block_height", "sealed");

        tracing::trace!(%url, args = args.len(), "executing cadence script");
        let response = self.http.post(url).json(&body).send().await?;
        let encoded: String = Self::map_response(response).await?;

        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|err| FlowAccessError::parse_error(format!("script result: {err}")))?;
        serde_json::from_slice(&bytes)
            .map_err(|err| FlowAccessError::parse_error(format!("script result: {err}")))
    }

    async fn map_response<T>(response: Response) -> Result<T, FlowAccessError>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::map_api_error(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn map_api_error(response: Response) -> FlowAccessError {
        let status = response.status().as_u16();
        let bytes = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ApiErrorResponse>(&bytes)
            .ok()
            .and_then(|api_error| api_error.message)
            .unwrap_or_else(|| String::from_utf8_lossy(&bytes).to_string());
        FlowAccessError::Server { status, message }
    }
}

#[async_trait]
impl ChainQuery for FlowAccessClient {
    async fn execute_script(
        &self,
        script: &str,
        args: &[CadenceArgument],
    ) -> Result<Value, ChainQueryError> {
        let raw = self.execute_script_at_latest_block(script, args).await?;
        Ok(cadence::decode(&raw)?)
    }
}

#[derive(Debug, Serialize)]
struct ScriptRequest {
    script: String,
    arguments: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
}
