use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::extract::{QueryParams, ValidatedJson};
use crate::handlers::{list_items, InsertedResponse, ItemsResponse, ListParams};
use crate::models::Contact;
use crate::repositories::DocumentRepository;
use crate::state::AppState;

/// List contact submissions, newest first (50 unless `limit` is given)
#[utoipa::path(
    get,
    path = "/api/contacts",
    params(ListParams),
    responses(
        (status = 200, description = "List of contact submissions", body = ItemsResponse),
        (status = 422, description = "Invalid limit"),
        (status = 500, description = "Database error")
    ),
    tag = "Contacts"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<ItemsResponse>> {
    let limit = params.limit.unwrap_or(Contact::DEFAULT_LIST_LIMIT);
    let items = list_items(&state, Contact::COLLECTION, Some(limit)).await?;
    Ok(Json(items))
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = Contact,
    responses(
        (status = 201, description = "Contact submission stored", body = InsertedResponse),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Database error")
    ),
    tag = "Contacts"
)]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(contact): ValidatedJson<Contact>,
) -> AppResult<(StatusCode, Json<InsertedResponse>)> {
    let inserted_id =
        DocumentRepository::create_document(state.store()?, Contact::COLLECTION, &contact).await?;

    Ok((StatusCode::CREATED, Json(InsertedResponse { inserted_id })))
}
