use bson::{Bson, Document};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::store::{DocumentStore, CREATED_AT};

/// Repository over the document store: inserts records and reads them back
/// as plain JSON
pub struct DocumentRepository;

impl DocumentRepository {
    /// Insert a validated record, stamping creation time.
    /// Returns the new identifier in string form.
    pub async fn create_document<T>(
        store: &dyn DocumentStore,
        collection: &str,
        record: &T,
    ) -> AppResult<String>
    where
        T: Serialize + Sync,
    {
        let mut doc = bson::to_document(record)?;
        let now = bson::DateTime::now();
        doc.insert(CREATED_AT, now);
        doc.insert("updated_at", now);

        let id = store.insert(collection, doc).await?;
        tracing::debug!(collection, %id, "Inserted document");

        Ok(id)
    }

    /// Fetch documents matching `filter`, capped at `limit` when given.
    /// Identifiers and timestamps are normalized to strings.
    pub async fn get_documents(
        store: &dyn DocumentStore,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> AppResult<Vec<Value>> {
        let docs = store.find(collection, filter, limit).await?;
        Ok(docs.into_iter().map(Self::normalize_document).collect())
    }

    /// Order documents by `created_at` descending. Documents without a
    /// parseable timestamp go last; ties keep their relative order.
    pub fn sort_newest_first(items: &mut [Value]) {
        items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    }

    pub fn normalize_document(doc: Document) -> Value {
        normalize(Bson::Document(doc))
    }
}

fn created_at(item: &Value) -> Option<bson::DateTime> {
    item.get(CREATED_AT)
        .and_then(Value::as_str)
        .and_then(|s| bson::DateTime::parse_rfc3339_str(s).ok())
}

/// Convert BSON into the JSON clients see: ObjectIds as hex strings,
/// datetimes as RFC 3339
fn normalize(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or_else(|_| Value::from(dt.timestamp_millis())),
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other.into_relaxed_extjson(),
    }
}
