//! Validation rules and persistence orchestration. The HTTP layer re-uses these as is,
//! they are the source of truth for what a valid write looks like.

pub mod auth;
pub mod category;
pub mod menu;

/// Trims an optional text field, collapsing blanks into `None`.
pub(crate) fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
