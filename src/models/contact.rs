use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Contact form submission, stored in the `contact` collection
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Contact {
    #[validate(length(min = 2, max = 200, message = "Name must be 2-200 characters"))]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    #[validate(length(min = 5, max = 5000, message = "Message must be 5-5000 characters"))]
    pub message: String,
    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,
}

impl Contact {
    pub const COLLECTION: &'static str = "contact";

    /// Default page size when listing contacts
    pub const DEFAULT_LIST_LIMIT: i64 = 50;
}

/// Require a dotted, deliverable-looking domain (`example.com`, not
/// `localhost`). Addresses without `@` are left to the `email` rule.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        let mut err = ValidationError::new("email_domain");
        err.message = Some("Email domain must contain a period".into());
        return Err(err);
    }

    Ok(())
}
