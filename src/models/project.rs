use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Portfolio project, stored in the `project` collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Project {
    #[validate(length(min = 2, max = 200, message = "Title must be 2-200 characters"))]
    pub title: String,
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
    #[validate(length(max = 10, message = "Year must be at most 10 characters"))]
    pub year: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Public URL to a project image
    pub image_url: Option<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

impl Project {
    pub const COLLECTION: &'static str = "project";
}
