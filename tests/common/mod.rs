//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use freshservice::{Config, Freshservice, RetryPolicy};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

/// Retries with millisecond waits so 5xx tests finish quickly.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy::new().with_wait(Duration::from_millis(1), Duration::from_millis(2))
}

pub fn config_for(server: &MockServer) -> Config {
    Config::new("acme", API_KEY)
        .unwrap()
        .with_retry(fast_retry())
        .with_base_url(&format!("{}/api/v2", server.uri()))
        .unwrap()
}

pub fn client_for(server: &MockServer) -> Freshservice {
    Freshservice::new(&config_for(server)).unwrap()
}
