use async_trait::async_trait;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{Client, Database};

use crate::error::AppResult;
use crate::store::{id_to_string, DocumentStore, CREATED_AT};

/// MongoDB-backed document store
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Create a client for `url` and bind it to database `name`.
    /// The driver connects lazily, so this does not touch the network.
    pub async fn connect(url: &str, name: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(url).await?;
        Ok(Self {
            db: client.database(name),
        })
    }
}

/// Zero and negative limits mean "no cap"
fn positive_limit(limit: Option<i64>) -> Option<i64> {
    limit.filter(|l| *l > 0)
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    async fn insert(&self, collection: &str, doc: Document) -> AppResult<String> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(doc)
            .await?;

        Ok(id_to_string(&result.inserted_id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Document>> {
        let collection = self.db.collection::<Document>(collection);

        // Missing created_at sorts lowest, so those documents come last
        let mut find = collection.find(filter).sort(doc! { CREATED_AT: -1 });

        if let Some(limit) = positive_limit(limit) {
            find = find.limit(limit);
        }

        let docs: Vec<Document> = find.await?.try_collect().await?;
        Ok(docs)
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        let names = self.db.list_collection_names().await?;
        Ok(names)
    }
}
