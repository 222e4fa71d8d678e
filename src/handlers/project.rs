use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::extract::{QueryParams, ValidatedJson};
use crate::handlers::{list_items, InsertedResponse, ItemsResponse, ListParams};
use crate::models::Project;
use crate::repositories::DocumentRepository;
use crate::state::AppState;

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    params(ListParams),
    responses(
        (status = 200, description = "List of projects", body = ItemsResponse),
        (status = 422, description = "Invalid limit"),
        (status = 500, description = "Database error")
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<ItemsResponse>> {
    let items = list_items(&state, Project::COLLECTION, params.limit).await?;
    Ok(Json(items))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = Project,
    responses(
        (status = 201, description = "Project created successfully", body = InsertedResponse),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Database error")
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(project): ValidatedJson<Project>,
) -> AppResult<(StatusCode, Json<InsertedResponse>)> {
    let inserted_id =
        DocumentRepository::create_document(state.store()?, Project::COLLECTION, &project).await?;

    Ok((StatusCode::CREATED, Json(InsertedResponse { inserted_id })))
}
