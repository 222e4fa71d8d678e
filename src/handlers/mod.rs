pub mod common;
pub mod contact;
pub mod health;
pub mod project;

pub(crate) use common::list_items;
pub use common::{InsertedResponse, ItemsResponse, ListParams, MessageResponse};
pub use contact::{create_contact, list_contacts};
pub use health::{hello, root, test_database, DiagnosticsResponse};
pub use project::{create_project, list_projects};
