use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use bson::Document;
use portfolio_backend::build_router;
use portfolio_backend::config::Config;
use portfolio_backend::error::{AppError, AppResult};
use portfolio_backend::state::AppState;
use portfolio_backend::store::{DocumentStore, InMemoryStore};

/// Test configuration
pub fn test_config() -> Config {
    Config {
        database_url: Some("mongodb://localhost:27017".to_string()),
        database_name: Some("portfolio_test".to_string()),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a new test application backed by an in-memory store
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::named("portfolio_test"));
        let state = AppState::with_store(test_config(), store.clone());

        Self {
            server: server(state),
            store,
        }
    }

    /// Server with no database attached
    pub fn without_store(config: Config) -> TestServer {
        server(AppState::without_store(config))
    }

    /// Server whose database rejects every call
    pub fn with_failing_store() -> TestServer {
        server(AppState::with_store(test_config(), Arc::new(FailingStore)))
    }
}

fn server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).expect("Failed to create test server")
}

/// Store that fails every operation, standing in for a lost connection
pub struct FailingStore;

const FAILURE: &str = "connection refused: server selection timeout after 30000ms while \
                       waiting for a suitable server to become available";

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn insert(&self, _collection: &str, _doc: Document) -> AppResult<String> {
        Err(AppError::Storage(FAILURE.to_string()))
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: Document,
        _limit: Option<i64>,
    ) -> AppResult<Vec<Document>> {
        Err(AppError::Storage(FAILURE.to_string()))
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        Err(AppError::Storage(FAILURE.to_string()))
    }
}
