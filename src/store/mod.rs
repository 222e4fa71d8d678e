pub mod memory_store;
pub mod mongo_store;

pub use memory_store::InMemoryStore;
pub use mongo_store::MongoStore;

use async_trait::async_trait;
use bson::{Bson, Document};

use crate::error::AppResult;

/// Field every stored document is ordered by when listed
pub const CREATED_AT: &str = "created_at";

/// Document store trait for abstracting database backends
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database
    fn name(&self) -> &str;

    /// Insert a document and return its identifier as a string
    async fn insert(&self, collection: &str, doc: Document) -> AppResult<String>;

    /// Find documents matching `filter`, newest first, capped at `limit`.
    /// A limit of zero or `None` means no cap.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Document>>;

    /// Names of all collections in the database
    async fn list_collection_names(&self) -> AppResult<Vec<String>>;
}

/// Render a database-native identifier in its canonical string form
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
