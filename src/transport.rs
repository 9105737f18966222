//! GraphQL-over-HTTP transport.
//!
//! The SDK treats the backend as one opaque capability: execute a query
//! document with variables and hand back the raw response envelope.
//! [`HttpTransport`] is the production implementation; tests (and callers
//! that already own a GraphQL client) substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

// ---------------------------------------------------------------------------
// GraphqlTransport
// ---------------------------------------------------------------------------

/// A single request/response capability against a GraphQL backend.
///
/// Implementations return the full response envelope (`{"data": ...}` and/or
/// `{"errors": [...]}`); envelope interpretation happens in
/// [`Connection`](crate::connection::Connection).
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Execute `document` with `variables` and return the raw response body.
    async fn execute(&self, document: &str, variables: Value) -> Result<Value>;
}

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

/// POSTs GraphQL documents to an HTTP endpoint via [`reqwest`].
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport for the given endpoint URL.
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("launchpad-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint URL this transport talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        log::debug!("POST {}", self.endpoint);

        let body = serde_json::json!({
            "query": document,
            "variables": variables,
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }
}
