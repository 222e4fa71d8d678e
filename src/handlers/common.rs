use bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::repositories::DocumentRepository;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Maximum number of items to return; 0 means no limit
    #[param(minimum = 0)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemsResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InsertedResponse {
    pub inserted_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Fetch a collection capped at `limit` and order it newest first
pub(crate) async fn list_items(
    state: &AppState,
    collection: &str,
    limit: Option<i64>,
) -> AppResult<ItemsResponse> {
    if limit.is_some_and(|l| l < 0) {
        return Err(AppError::InvalidInput(
            "limit must be greater than or equal to 0".to_string(),
        ));
    }

    let mut items =
        DocumentRepository::get_documents(state.store()?, collection, doc! {}, limit).await?;
    DocumentRepository::sort_newest_first(&mut items);

    Ok(ItemsResponse { items })
}
