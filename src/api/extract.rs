use axum::extract::FromRequest;
use uuid::Uuid;

use crate::error::AppError;

/// `axum::Json` with rejections reported in the usual `{ "error": .. }` shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Ids that do not parse cannot exist, so they are reported as not found.
pub fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::NotFound(format!("No {what} with {raw} id was found")))
}
