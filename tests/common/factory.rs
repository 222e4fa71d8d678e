use bson::doc;

use portfolio_backend::models::{Contact, Project};
use portfolio_backend::store::{DocumentStore, InMemoryStore};

/// Factory for seeding test data directly into the store
pub struct Factory<'a> {
    store: &'a InMemoryStore,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(store: &'a InMemoryStore) -> Self {
        Self { store }
    }

    /// Seed a contact with an explicit creation time (milliseconds since epoch)
    pub async fn create_contact_at(&self, name: &str, created_at_millis: i64) -> String {
        self.store
            .insert(
                Contact::COLLECTION,
                doc! {
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "message": "Seeded message",
                    "phone": null,
                    "created_at": bson::DateTime::from_millis(created_at_millis),
                },
            )
            .await
            .unwrap()
    }

    /// Seed `count` contacts one second apart
    pub async fn create_contacts(&self, count: i64) {
        for i in 0..count {
            self.create_contact_at(&format!("Contact{}", i), 1_700_000_000_000 + i * 1_000)
                .await;
        }
    }

    /// Seed a project with an explicit creation time
    pub async fn create_project_at(&self, title: &str, created_at_millis: i64) -> String {
        self.store
            .insert(
                Project::COLLECTION,
                doc! {
                    "title": title,
                    "tags": [],
                    "created_at": bson::DateTime::from_millis(created_at_millis),
                },
            )
            .await
            .unwrap()
    }

    /// Seed a project that predates timestamping
    pub async fn create_undated_project(&self, title: &str) -> String {
        self.store
            .insert(Project::COLLECTION, doc! { "title": title, "tags": [] })
            .await
            .unwrap()
    }
}
