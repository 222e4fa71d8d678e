use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::truncate;
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// Collections reported by the diagnostic probe
const MAX_LISTED_COLLECTIONS: usize = 10;
/// Error text kept in the probe's database status
const MAX_PROBE_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = MessageResponse)),
    tag = "Health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the portfolio backend!".to_string(),
    })
}

/// Liveness message under the API prefix
#[utoipa::path(
    get,
    path = "/api/hello",
    responses((status = 200, description = "Service is up", body = MessageResponse)),
    tag = "Health"
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

/// Report database connectivity and configuration.
/// Always answers 200; failures are described in the body.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Diagnostic report", body = DiagnosticsResponse)),
    tag = "Health"
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: String::new(),
        database_name: String::new(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match &state.store {
        Some(store) => {
            response.database = "✅ Available".to_string();
            response.connection_status = "Connected".to_string();

            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    response.collections = names;
                    response.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!("Database probe failed: {}", e);
                    response.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate(&e.to_string(), MAX_PROBE_ERROR_CHARS)
                    );
                }
            }
        }
        None => {
            response.database = "⚠️  Available but not initialized".to_string();
        }
    }

    response.database_url = presence(state.config.database_url.is_some());
    response.database_name = presence(state.config.database_name.is_some());

    Json(response)
}

fn presence(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}
