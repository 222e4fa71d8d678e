use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::error::{AppError, AppResult};
use crate::store::{DocumentStore, MongoStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Document store, absent when the database is not configured or unreachable
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState, connecting to MongoDB when configured.
    /// A missing or failing database is logged and never fatal.
    pub async fn new(config: Config) -> Self {
        let store = match Self::connect(&config).await {
            Ok(store) => {
                tracing::info!(database = store.name(), "Document store ready");
                Some(Arc::new(store) as Arc<dyn DocumentStore>)
            }
            Err(e) => {
                tracing::warn!("Running without a database: {}", e);
                None
            }
        };

        Self { store, config }
    }

    /// Create AppState with a custom store (for testing)
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            config,
        }
    }

    /// Create AppState with no store attached
    pub fn without_store(config: Config) -> Self {
        Self {
            store: None,
            config,
        }
    }

    /// The document store, or `StoreUnavailable` if none is attached
    pub fn store(&self) -> AppResult<&dyn DocumentStore> {
        self.store.as_deref().ok_or(AppError::StoreUnavailable)
    }

    async fn connect(config: &Config) -> Result<MongoStore, AppStateError> {
        let (url, name) = config.database()?;
        MongoStore::connect(url, name)
            .await
            .map_err(|e| AppStateError::Mongo(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("MongoDB connection error: {0}")]
    Mongo(String),
}
