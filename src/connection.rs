//! Typed GraphQL request execution over a pluggable transport.
//!
//! Interprets the response envelope: a non-empty `errors` array (or a
//! missing `data` payload) surfaces as [`LaunchpadError::GraphQl`], and the
//! `data` payload is deserialized into the caller's type.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{LaunchpadError, Result};
use crate::transport::GraphqlTransport;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<EnvelopeError>>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
    message: String,
}

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// Executes GraphQL documents against a [`GraphqlTransport`] and decodes the
/// response envelope into typed payloads.
#[derive(Clone)]
pub struct Connection {
    transport: Arc<dyn GraphqlTransport>,
}

impl Connection {
    /// Create a connection backed by the given transport.
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    /// Execute a document and deserialize the `data` payload into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<T> {
        let data = self.request_raw(document, variables).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Execute a document and return the raw `data` payload.
    ///
    /// Escape-hatch access for queries not covered by the typed interfaces.
    pub async fn request_raw(&self, document: &str, variables: Value) -> Result<Value> {
        let body = self.transport.execute(document, variables).await?;
        let envelope: Envelope = serde_json::from_value(body)?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let joined = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(LaunchpadError::GraphQl(joined));
            }
        }

        match envelope.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(LaunchpadError::GraphQl("response contained no data".into())),
        }
    }
}
