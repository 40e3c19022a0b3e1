//! Stub Ollama endpoint for integration tests.
//!
//! Serves the same `/api/generate` contract as the real endpoint: a POST
//! with `{model, prompt, stream}` answered by `{"response": ...}`. Records
//! every prompt it receives so tests can assert on context chaining.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use mealplan_core::generator::{GeneratorConfig, OllamaClient};

/// How the stub answers each request.
pub enum StubBehavior {
    /// The same body on every call.
    Respond(String),
    /// One body per call, in order; empty string past the end.
    RespondEach(Vec<String>),
    /// HTTP 500 on every call.
    Fail,
    /// HTTP 500 on the given 1-based call number, canned text otherwise.
    FailOnCall(usize),
    /// HTTP 200 with a JSON body missing the `response` field.
    MalformedBody,
}

struct StubState {
    behavior: StubBehavior,
    hits: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

/// A running stub endpoint bound to an ephemeral local port.
pub struct StubEndpoint {
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubEndpoint {
    /// Bind to an ephemeral port and serve in a background task.
    pub async fn spawn(behavior: StubBehavior) -> Self {
        let state = Arc::new(StubState {
            behavior,
            hits: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/generate", post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub endpoint");
        let addr = listener.local_addr().expect("listener has a local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub endpoint serve failed");
        });

        Self { addr, state }
    }

    /// An [`OllamaClient`] pointed at this stub.
    pub fn client(&self) -> OllamaClient {
        let config = GeneratorConfig::new(
            format!("http://{}/api/generate", self.addr),
            "stub-model",
        );
        OllamaClient::new(config).expect("client construction should succeed")
    }

    /// Number of requests the stub has served.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Every prompt received so far, in arrival order.
    pub fn prompts(&self) -> Vec<String> {
        self.state.prompts.lock().expect("prompt lock poisoned").clone()
    }
}

async fn handle_generate(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Response {
    let call = state.hits.fetch_add(1, Ordering::SeqCst) + 1;

    if let Some(prompt) = body.get("prompt").and_then(Value::as_str) {
        state
            .prompts
            .lock()
            .expect("prompt lock poisoned")
            .push(prompt.to_owned());
    }

    match &state.behavior {
        StubBehavior::Respond(text) => Json(json!({ "response": text })).into_response(),
        StubBehavior::RespondEach(bodies) => {
            let text = bodies.get(call - 1).cloned().unwrap_or_default();
            Json(json!({ "response": text })).into_response()
        }
        StubBehavior::Fail => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        StubBehavior::FailOnCall(n) if call == *n => {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        StubBehavior::FailOnCall(_) => {
            Json(json!({ "response": format!("canned recipe {call}") })).into_response()
        }
        StubBehavior::MalformedBody => Json(json!({ "done": true })).into_response(),
    }
}
