//! Common test utilities for integration tests.
//!
//! The service keeps no external state, so every test gets its own router
//! built from an in-memory config.

use axum::Router;
use serde_json::{json, Value};

use memorise_backend::config::Config;
use memorise_backend::{router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            app: router(AppState::new(config)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Build a compare request body.
pub fn compare_body(reference: &str, candidate: &str) -> Value {
    json!({
        "reference": reference,
        "candidate": candidate,
    })
}

/// Build a compare request body with options.
pub fn compare_body_with(reference: &str, candidate: &str, options: Value) -> Value {
    json!({
        "reference": reference,
        "candidate": candidate,
        "options": options,
    })
}

/// Statuses of the entries in a serialized result, in order.
pub fn entry_statuses(body: &Value) -> Vec<String> {
    body["result"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["status"].as_str().unwrap().to_string())
        .collect()
}
