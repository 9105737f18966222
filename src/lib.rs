//! Launchpad SDK for Rust.
//!
//! Provides a typed client for a token-launchpad GraphQL indexer: one-shot
//! queries for token pages and single-token detail with price history, plus
//! watch handles that own the loading/error/result state a UI layer reads
//! between renders.
//!
//! # Quick start
//!
//! ```no_run
//! use launchpad_sdk::{LaunchpadSdk, TokenListParams};
//!
//! # async fn example() -> launchpad_sdk::Result<()> {
//! let sdk = LaunchpadSdk::builder()
//!     .endpoint("https://indexer.example.com/graphql")
//!     .build()?;
//!
//! // One-shot query
//! let tokens = sdk
//!     .tokens()
//!     .list(&TokenListParams::new(1, "marketCap", 10))
//!     .await?;
//!
//! // Stateful watch for a UI layer
//! let watch = sdk.watch_tokens(TokenListParams::new(1, "timestamp", 50));
//! watch.load().await;
//! let snapshot = watch.snapshot();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod transport;
pub mod watch;

pub use connection::Connection;
pub use error::{LaunchpadError, Result};
pub use models::{PriceBar, PriceSeries, Token, TokenDetail, TokenWithPrices};
pub use queries::tokens::{TokenListParams, TokenQuery};
pub use transport::{GraphqlTransport, HttpTransport};
pub use watch::{
    TokenDetailSnapshot, TokenDetailWatch, TokenListSnapshot, TokenListWatch, FETCH_ERROR_MSG,
};

use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// LaunchpadSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`LaunchpadSdk`] instance.
///
/// Use [`LaunchpadSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](LaunchpadSdkBuilder::build) to create the SDK.
pub struct LaunchpadSdkBuilder {
    endpoint: String,
    timeout: Duration,
    transport: Option<Arc<dyn GraphqlTransport>>,
}

impl Default for LaunchpadSdkBuilder {
    fn default() -> Self {
        Self {
            endpoint: config::DEFAULT_ENDPOINT.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl LaunchpadSdkBuilder {
    /// Set the GraphQL endpoint URL.
    ///
    /// Defaults to [`config::DEFAULT_ENDPOINT`], the address of a locally
    /// running indexer.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supply a custom transport instead of the built-in HTTP one.
    ///
    /// The endpoint and timeout settings are ignored when a transport is
    /// supplied. Used by tests and by callers that already own a GraphQL
    /// client.
    pub fn transport(mut self, transport: Arc<dyn GraphqlTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the SDK, constructing the HTTP client unless a custom transport
    /// was supplied.
    pub fn build(self) -> Result<LaunchpadSdk> {
        let transport: Arc<dyn GraphqlTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(self.endpoint, self.timeout)?),
        };
        Ok(LaunchpadSdk {
            conn: Arc::new(Connection::new(transport)),
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchpadSdk
// ---------------------------------------------------------------------------

/// The main entry point for the launchpad SDK.
///
/// Wraps a [`Connection`] (which owns the GraphQL transport) and exposes the
/// query interface as a lightweight borrowing wrapper plus watch-handle
/// constructors for UI state.
///
/// Created via [`LaunchpadSdk::builder()`].
pub struct LaunchpadSdk {
    conn: Arc<Connection>,
}

impl LaunchpadSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> LaunchpadSdkBuilder {
        LaunchpadSdkBuilder::default()
    }

    /// Access the token query interface.
    pub fn tokens(&self) -> TokenQuery<'_> {
        TokenQuery::new(&self.conn)
    }

    /// Create a watch over a page of token summaries.
    ///
    /// The watch starts in the loading state; call
    /// [`load`](TokenListWatch::load) to run the initial fetch.
    pub fn watch_tokens(&self, params: TokenListParams) -> TokenListWatch {
        TokenListWatch::new(self.conn.clone(), params)
    }

    /// Create a watch over one token's detail.
    ///
    /// The identifier is captured here; [`refetch`](TokenDetailWatch::refetch)
    /// always re-runs for this same identifier.
    pub fn watch_token(&self, id: impl Into<String>) -> TokenDetailWatch {
        TokenDetailWatch::new(self.conn.clone(), id)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
