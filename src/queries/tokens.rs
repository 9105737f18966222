//! Token queries against the launchpad GraphQL indexer.

use serde::Deserialize;
use serde_json::json;

use crate::config;
use crate::error::{LaunchpadError, Result};
use crate::models::{Token, TokenWithPrices};

// ---------------------------------------------------------------------------
// TokenListParams
// ---------------------------------------------------------------------------

/// Parameters for the token list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenListParams {
    pub chain_id: u64,
    /// Indexer column the page is ordered by, e.g. `"marketCap"` or
    /// `"timestamp"`.
    pub order_by: String,
    pub limit: u32,
}

impl TokenListParams {
    pub fn new(chain_id: u64, order_by: impl Into<String>, limit: u32) -> Self {
        Self {
            chain_id,
            order_by: order_by.into(),
            limit,
        }
    }
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TokensData {
    tokens: TokenPage,
}

#[derive(Debug, Deserialize)]
struct TokenPage {
    items: Vec<Token>,
}

#[derive(Debug, Deserialize)]
struct TokenData {
    token: Option<TokenWithPrices>,
}

// ---------------------------------------------------------------------------
// TokenQuery
// ---------------------------------------------------------------------------

/// Query interface for launchpad tokens, bound to a
/// [`Connection`](crate::connection::Connection).
pub struct TokenQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> TokenQuery<'a> {
    /// Create a new `TokenQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Fetch a page of token summaries for a chain.
    ///
    /// Items come back exactly as served: no client-side reordering or
    /// filtering.
    pub async fn list(&self, params: &TokenListParams) -> Result<Vec<Token>> {
        let variables = json!({
            "chainId": params.chain_id,
            "orderBy": params.order_by,
            "limit": params.limit,
        });

        let data: TokensData = self.conn.request(config::GET_TOKENS, variables).await?;
        Ok(data.tokens.items)
    }

    /// Fetch one token's full detail, including its price-bar history.
    ///
    /// Returns `None` for an identifier the indexer does not know.
    pub async fn get(&self, id: &str) -> Result<Option<TokenWithPrices>> {
        if id.is_empty() {
            return Err(LaunchpadError::InvalidArgument("empty token id".into()));
        }

        let data: TokenData = self
            .conn
            .request(config::GET_TOKEN, json!({ "id": id }))
            .await?;
        Ok(data.token)
    }
}
