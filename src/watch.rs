//! Stateful fetchers binding query results to view state.
//!
//! [`TokenListWatch`] and [`TokenDetailWatch`] own the result/loading/error
//! state a UI reads between renders. Calls take `&self`, so fetches may
//! overlap; every fetch takes a sequence ticket when it starts and its
//! completion is applied only while that ticket is still current. A response
//! from a superseded request is discarded whole -- it does not even clear the
//! loading flag, which the newer in-flight request owns.
//!
//! Failures collapse into one fixed user-facing string; the underlying fault
//! goes to the log.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::connection::Connection;
use crate::models::{Token, TokenWithPrices};
use crate::queries::tokens::{TokenListParams, TokenQuery};

/// Fixed user-facing message set on any fetch failure.
pub const FETCH_ERROR_MSG: &str = "An Error occured while fetching tokens...";

// ---------------------------------------------------------------------------
// TokenListWatch
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ListState {
    params: TokenListParams,
    tokens: Vec<Token>,
    loading: bool,
    error: Option<String>,
    seq: u64,
}

/// Copy of a [`TokenListWatch`]'s state at one point in time.
#[derive(Debug, Clone)]
pub struct TokenListSnapshot {
    pub tokens: Vec<Token>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Watches a page of token summaries for one (chain, ordering, limit) choice.
///
/// Created via [`LaunchpadSdk::watch_tokens`](crate::LaunchpadSdk::watch_tokens).
/// Call [`load`](Self::load) once to run the initial fetch, then
/// [`set_params`](Self::set_params) whenever the choice changes.
pub struct TokenListWatch {
    conn: Arc<Connection>,
    state: Mutex<ListState>,
}

impl TokenListWatch {
    pub(crate) fn new(conn: Arc<Connection>, params: TokenListParams) -> Self {
        Self {
            conn,
            state: Mutex::new(ListState {
                params,
                tokens: Vec::new(),
                loading: true,
                error: None,
                seq: 0,
            }),
        }
    }

    /// Run the initial fetch for the params the watch was created with.
    pub async fn load(&self) {
        self.fetch_current().await;
    }

    /// Switch to a new (chain, ordering, limit) choice.
    ///
    /// Unchanged params are a no-op. On any change the current result set is
    /// cleared before the request is issued, so a reader never sees old and
    /// new pages mixed.
    pub async fn set_params(&self, params: TokenListParams) {
        {
            let mut st = self.lock();
            if st.params == params {
                return;
            }
            st.params = params;
            st.tokens.clear();
        }
        self.fetch_current().await;
    }

    /// The params currently being watched.
    pub fn params(&self) -> TokenListParams {
        self.lock().params.clone()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> TokenListSnapshot {
        let st = self.lock();
        TokenListSnapshot {
            tokens: st.tokens.clone(),
            loading: st.loading,
            error: st.error.clone(),
        }
    }

    async fn fetch_current(&self) {
        let (ticket, params) = {
            let mut st = self.lock();
            st.loading = true;
            st.error = None;
            st.seq += 1;
            (st.seq, st.params.clone())
        };

        let result = TokenQuery::new(&self.conn).list(&params).await;

        let mut st = self.lock();
        if st.seq != ticket {
            // Superseded while in flight; the newer request owns the state.
            return;
        }
        match result {
            Ok(items) => st.tokens = items,
            Err(e) => {
                log::error!("token list fetch failed: {e}");
                st.error = Some(FETCH_ERROR_MSG.to_string());
            }
        }
        st.loading = false;
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        // The lock is never held across an await, so poisoning is unreachable.
        self.state.lock().expect("list watch state poisoned")
    }
}

// ---------------------------------------------------------------------------
// TokenDetailWatch
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct DetailState {
    token: Option<TokenWithPrices>,
    loading: bool,
    error: Option<String>,
    seq: u64,
}

/// Copy of a [`TokenDetailWatch`]'s state at one point in time.
#[derive(Debug, Clone)]
pub struct TokenDetailSnapshot {
    pub token: Option<TokenWithPrices>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Watches one token's full detail, including its price-bar history.
///
/// The identifier is captured at creation and never changes;
/// [`refetch`](Self::refetch) always re-runs for that same identifier.
pub struct TokenDetailWatch {
    conn: Arc<Connection>,
    id: String,
    state: Mutex<DetailState>,
}

impl TokenDetailWatch {
    pub(crate) fn new(conn: Arc<Connection>, id: impl Into<String>) -> Self {
        Self {
            conn,
            id: id.into(),
            state: Mutex::new(DetailState {
                token: None,
                loading: true,
                error: None,
                seq: 0,
            }),
        }
    }

    /// The identifier captured at creation.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the detail for the captured identifier.
    ///
    /// An empty identifier short-circuits: the loading flag is cleared, no
    /// request is issued, and any previously fetched detail stays in place.
    pub async fn load(&self) {
        let ticket = {
            let mut st = self.lock();
            st.loading = true;
            st.error = None;
            st.seq += 1;
            st.seq
        };

        if self.id.is_empty() {
            let mut st = self.lock();
            if st.seq == ticket {
                st.loading = false;
            }
            return;
        }

        let result = TokenQuery::new(&self.conn).get(&self.id).await;

        let mut st = self.lock();
        if st.seq != ticket {
            return;
        }
        match result {
            Ok(token) => st.token = token,
            Err(e) => {
                log::error!("token detail fetch failed for {}: {e}", self.id);
                st.error = Some(FETCH_ERROR_MSG.to_string());
            }
        }
        st.loading = false;
    }

    /// Re-run the fetch for the identifier captured at creation.
    pub async fn refetch(&self) {
        self.load().await;
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> TokenDetailSnapshot {
        let st = self.lock();
        TokenDetailSnapshot {
            token: st.token.clone(),
            loading: st.loading,
            error: st.error.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DetailState> {
        self.state.lock().expect("detail watch state poisoned")
    }
}
