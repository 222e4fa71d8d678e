// Library crate for the portfolio backend
// Exports modules for use by the server binary and tests

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod state;
pub mod store;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    create_contact, create_project, hello, list_contacts, list_projects, root, test_database,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health routes
        .route("/", get(root))
        .route("/api/hello", get(hello))
        .route("/test", get(test_database))
        // Project routes
        .route("/api/projects", get(list_projects).post(create_project))
        // Contact routes
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::very_permissive()),
        )
        .with_state(state)
}
