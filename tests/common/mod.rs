#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use blockpage::state::AppState;
use blockpage::version::{StaticVersionProvider, VersionProvider};

/// Test provider that counts how many times the version lookup runs.
pub struct CountingProvider {
    calls: Arc<AtomicUsize>,
    version: Option<String>,
}

impl CountingProvider {
    pub fn new(version: Option<&str>) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Arc::new(Self {
            calls: calls.clone(),
            version: version.map(|v| v.to_string()),
        });
        (provider, calls)
    }
}

#[async_trait]
impl VersionProvider for CountingProvider {
    async fn current_version(&self) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.version.clone()
    }
}

pub const TEST_SERVER_ADDR: &str = "192.168.1.2";

pub fn create_test_state(provider: Arc<dyn VersionProvider>) -> AppState {
    AppState {
        version: provider,
        server_addr: TEST_SERVER_ADDR.to_string(),
    }
}

pub fn create_test_state_with_version(version: &str) -> AppState {
    create_test_state(Arc::new(StaticVersionProvider::pinned(version)))
}

pub fn create_test_state_without_version() -> AppState {
    create_test_state(Arc::new(StaticVersionProvider::unavailable()))
}
