use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::store::{id_to_string, DocumentStore, CREATED_AT};

/// In-memory document store for testing
#[derive(Clone)]
pub struct InMemoryStore {
    name: String,
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of documents currently held in `collection`
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.lock().await;
        collections.get(collection).map_or(0, Vec::len)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level equality match, the subset of query semantics this service uses
fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, value)| doc.get(key) == Some(value))
}

fn created_at(doc: &Document) -> Option<bson::DateTime> {
    doc.get_datetime(CREATED_AT).ok().copied()
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, collection: &str, mut doc: Document) -> AppResult<String> {
        let id = match doc.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                doc.insert("_id", id.clone());
                id
            }
        };

        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);

        Ok(id_to_string(&id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Document>> {
        let collections = self.collections.lock().await;
        let mut docs: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        drop(collections);

        docs.sort_by(|a, b| created_at(b).cmp(&created_at(a)));

        if let Some(limit) = limit.filter(|l| *l > 0) {
            docs.truncate(limit as usize);
        }

        Ok(docs)
    }

    async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        let collections = self.collections.lock().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn test_insert_assigns_object_id() {
        let store = InMemoryStore::new();

        let id = store
            .insert("contact", doc! { "name": "Ada" })
            .await
            .unwrap();

        assert_eq!(id.len(), 24);
        assert!(ObjectId::parse_str(&id).is_ok());

        let docs = store.find("contact", doc! {}, None).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_object_id("_id").unwrap().to_hex(), id);
    }

    #[tokio::test]
    async fn test_find_newest_first_with_limit() {
        let store = InMemoryStore::new();

        for millis in [1_000, 3_000, 2_000] {
            store
                .insert(
                    "project",
                    doc! {
                        "title": millis.to_string(),
                        CREATED_AT: bson::DateTime::from_millis(millis),
                    },
                )
                .await
                .unwrap();
        }
        store
            .insert("project", doc! { "title": "undated" })
            .await
            .unwrap();

        let docs = store.find("project", doc! {}, None).await.unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["3000", "2000", "1000", "undated"]);

        let docs = store.find("project", doc! {}, Some(2)).await.unwrap();
        assert_eq!(docs.len(), 2);

        // Zero means unbounded, as with the driver
        let docs = store.find("project", doc! {}, Some(0)).await.unwrap();
        assert_eq!(docs.len(), 4);
    }

    #[tokio::test]
    async fn test_find_filter_and_missing_collection() {
        let store = InMemoryStore::new();
        store
            .insert("contact", doc! { "name": "Ada" })
            .await
            .unwrap();
        store
            .insert("contact", doc! { "name": "Grace" })
            .await
            .unwrap();

        let docs = store
            .find("contact", doc! { "name": "Grace" }, None)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);

        let docs = store.find("project", doc! {}, None).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_list_collection_names() {
        let store = InMemoryStore::new();
        assert!(store.list_collection_names().await.unwrap().is_empty());

        store.insert("project", doc! {}).await.unwrap();
        store.insert("contact", doc! {}).await.unwrap();

        assert_eq!(
            store.list_collection_names().await.unwrap(),
            vec!["contact".to_string(), "project".to_string()]
        );
        assert_eq!(store.count("project").await, 1);
    }
}
