use crate::response::ApiResponse;
use crate::validator::ParsedRequest;
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Why a request to the processing endpoint produced no usable response.
///
/// The display text is the plain message; callers prefix it for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("{0}")]
    Network(String),
    #[error("Request failed with status code {code}")]
    HttpStatus { code: u16 },
    #[error("{0}")]
    Decode(String),
}

/// Something that can forward a validated request and hand back the response.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn submit(&self, request: &ParsedRequest) -> Result<ApiResponse, InvocationError>;
}

/// Posts requests to a single fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpInvoker {
    client: Client,
    endpoint: String,
}

impl HttpInvoker {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Use a preconfigured client, e.g. one with custom proxy settings.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Invoker for HttpInvoker {
    async fn submit(&self, request: &ParsedRequest) -> Result<ApiResponse, InvocationError> {
        info!(endpoint = %self.endpoint, items = request.data().len(), "posting request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| InvocationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "endpoint rejected request");
            return Err(InvocationError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| InvocationError::Network(e.to_string()))?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| InvocationError::Decode(e.to_string()))?;

        ApiResponse::try_from(value).map_err(|other| {
            InvocationError::Decode(format!(
                "expected a JSON object in the response body, found {}",
                json_kind(&other)
            ))
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
