//! Shared test fixtures for the launchpad SDK integration tests.
//!
//! Provides in-memory transports that stand in for the GraphQL backend:
//! [`RecordingTransport`] replays canned response envelopes in FIFO order,
//! [`GatedTransport`] additionally lets a test hold a response in flight and
//! release it later. Both record every executed (document, variables) pair.

#![allow(dead_code)] // not every test binary uses every helper

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use launchpad_sdk::error::{LaunchpadError, Result};
use launchpad_sdk::transport::GraphqlTransport;
use launchpad_sdk::LaunchpadSdk;
use serde_json::{json, Value};
use tokio::sync::oneshot;

// ---------------------------------------------------------------------------
// RecordingTransport
// ---------------------------------------------------------------------------

/// Canned-response transport. Responses are full GraphQL envelopes
/// (`{"data": ...}` / `{"errors": [...]}`) served FIFO; an empty queue acts
/// as a transport fault.
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Value>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Queue one raw response envelope.
    pub fn push_response(&self, envelope: Value) {
        self.responses.lock().unwrap().push_back(envelope);
    }

    /// Queue `{"data": data}`.
    pub fn push_data(&self, data: Value) {
        self.push_response(json!({ "data": data }));
    }

    /// Queue a single-message GraphQL error envelope.
    pub fn push_error(&self, message: &str) {
        self.push_response(json!({ "errors": [{ "message": message }] }));
    }

    /// All (document, variables) pairs executed so far.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphqlTransport for RecordingTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((document.to_string(), variables));
        match self.responses.lock().unwrap().pop_front() {
            Some(envelope) => Ok(envelope),
            None => Err(LaunchpadError::GraphQl("no canned response queued".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// GatedTransport
// ---------------------------------------------------------------------------

/// One scripted transport step: an immediate envelope, or one held until the
/// test fires the paired [`oneshot::Sender`].
pub enum Step {
    Ready(Value),
    Gated(oneshot::Receiver<Value>),
}

/// Scripted transport for interleaving tests. Steps are consumed FIFO; a
/// `Gated` step blocks inside `execute` until the test releases it, keeping
/// that request in flight while later requests complete.
pub struct GatedTransport {
    plan: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl GatedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            plan: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Queue an immediate response envelope.
    pub fn push_ready(&self, envelope: Value) {
        self.plan.lock().unwrap().push_back(Step::Ready(envelope));
    }

    /// Queue a held response; send the envelope on the returned sender to
    /// release it.
    pub fn push_gated(&self) -> oneshot::Sender<Value> {
        let (tx, rx) = oneshot::channel();
        self.plan.lock().unwrap().push_back(Step::Gated(rx));
        tx
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Spin until `n` calls have been issued (the in-flight ones included).
    pub async fn wait_for_calls(&self, n: usize) {
        for _ in 0..200 {
            if self.call_count() >= n {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        panic!("timed out waiting for {n} transport calls");
    }
}

#[async_trait]
impl GraphqlTransport for GatedTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((document.to_string(), variables));
        let step = self.plan.lock().unwrap().pop_front();
        match step {
            Some(Step::Ready(envelope)) => Ok(envelope),
            Some(Step::Gated(rx)) => Ok(rx.await.expect("gate sender dropped")),
            None => Err(LaunchpadError::GraphQl("no scripted response".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// Build a sample token summary as the indexer would serve it.
pub fn sample_token(n: u32) -> Value {
    json!({
        "id": format!("0xt{n:03}"),
        "address": format!("0x{:040x}", n),
        "chainId": 1,
        "creator": "0x00000000000000000000000000000000000c0ffe",
        "name": format!("Token {n}"),
        "symbol": format!("TK{n}"),
        "marketCap": "123456.789",
        "description": "A launchpad token",
        "logoUrl": format!("https://cdn.example.com/logos/{n}.png"),
        "timestamp": "1717171717"
    })
}

/// Build a sample token detail with two price bars.
pub fn sample_token_with_prices(n: u32) -> Value {
    let mut token = sample_token(n);
    token["isMigrated"] = json!(true);
    token["lpAddress"] = json!("0x00000000000000000000000000000000000d00d1");
    token["prices"] = json!({
        "items": [
            {
                "id": 1,
                "open": "0.0010",
                "high": "0.0015",
                "low": "0.0009",
                "close": "0.0012",
                "average": "0.0011",
                "count": "42"
            },
            {
                "id": 2,
                "open": "0.0012",
                "high": "0.0019",
                "low": "0.0011",
                "close": "0.0018",
                "average": "0.0014",
                "count": "17"
            }
        ]
    });
    token
}

/// Envelope for a token list page.
pub fn tokens_page(items: Vec<Value>) -> Value {
    json!({ "data": { "tokens": { "items": items } } })
}

/// Build an SDK wired to the given transport.
pub fn setup_sdk(transport: Arc<dyn GraphqlTransport>) -> LaunchpadSdk {
    LaunchpadSdk::builder()
        .transport(transport)
        .build()
        .unwrap()
}
