use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::entities::category;
use crate::error::AppError;
use crate::models::CategoryView;
use crate::repository;
use crate::services::normalize_optional;

const DUPLICATE_NAME: &str = "Category with this name already exists";

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[serde(default)]
    #[validate(length(max = 100, message = "Category name must be at most 100 characters"))]
    pub name: Option<String>,
    #[serde(default, alias = "nameInArabic", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Local name must be at most 100 characters"))]
    pub name_in_local_language: Option<String>,
}

impl CreateCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            name_in_local_language: None,
        }
    }

    /// Length caps apply to what gets stored, so surrounding blanks go first.
    fn trimmed(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_owned()),
            name_in_local_language: self.name_in_local_language.map(|n| n.trim().to_owned()),
        }
    }
}

/// Partial update, absent fields stay as they are. A blank local name clears it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Category name must be at most 100 characters"))]
    pub name: Option<String>,
    #[serde(default, alias = "nameInArabic", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Local name must be at most 100 characters"))]
    pub name_in_local_language: Option<String>,
}

impl UpdateCategory {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_owned()),
            name_in_local_language: self.name_in_local_language.map(|n| n.trim().to_owned()),
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("No category with {id} id was found"))
}

fn required_name(name: Option<&str>) -> Result<&str, AppError> {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::Validation("Category name is required".to_string()));
    }
    Ok(name)
}

pub async fn list_categories<C: ConnectionTrait>(db: &C) -> Result<Vec<CategoryView>, AppError> {
    Ok(repository::category::find_all_with_counts(db).await?)
}

pub async fn get_category<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<CategoryView, AppError> {
    repository::category::find_with_count(db, id)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn create_category<C: ConnectionTrait>(
    db: &C,
    input: CreateCategory,
) -> Result<CategoryView, AppError> {
    let input = input.trimmed();
    input.validate()?;
    let name = required_name(input.name.as_deref())?;

    if repository::category::find_by_name(db, name).await?.is_some() {
        return Err(AppError::Conflict(DUPLICATE_NAME.to_string()));
    }

    let local_name = normalize_optional(input.name_in_local_language.as_deref());
    let model = repository::category::insert(db, name, local_name.as_deref())
        .await
        .map_err(|err| AppError::from_write(err, DUPLICATE_NAME))?;

    info!(category_id = %model.id, name = %model.name, "Created category");
    Ok(CategoryView::new(model, 0))
}

pub async fn update_category<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    input: UpdateCategory,
) -> Result<CategoryView, AppError> {
    let input = input.trimmed();
    input.validate()?;

    let existing = repository::category::find_by_id(db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let mut category: category::ActiveModel = existing.clone().into();

    if let Some(name) = input.name.as_deref() {
        let name = required_name(Some(name))?;
        if name != existing.name {
            if let Some(other) = repository::category::find_by_name(db, name).await? {
                if other.id != id {
                    return Err(AppError::Conflict(DUPLICATE_NAME.to_string()));
                }
            }
            category.name = Set(name.to_owned());
        }
    }

    if let Some(local_name) = input.name_in_local_language.as_deref() {
        category.name_in_local_language = Set(normalize_optional(Some(local_name)));
    }

    let model = if category.is_changed() {
        repository::category::update(db, category)
            .await
            .map_err(|err| AppError::from_write(err, DUPLICATE_NAME))?
    } else {
        existing
    };

    let item_count = repository::category::count_items(db, id).await?;
    info!(category_id = %id, "Updated category");
    Ok(CategoryView::new(model, item_count as i64))
}

/// Categories that still hold menu items are never removed.
pub async fn delete_category<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), AppError> {
    if repository::category::find_by_id(db, id).await?.is_none() {
        return Err(not_found(id));
    }

    let item_count = repository::category::count_items(db, id).await?;
    if item_count > 0 {
        return Err(AppError::Conflict(format!(
            "Category still has {item_count} menu item(s), move or delete them first"
        )));
    }

    let removed = repository::category::delete(db, id)
        .await
        .map_err(|err| AppError::from_write(err, "Category is still referenced by menu items"))?;
    if removed == 0 {
        return Err(not_found(id));
    }

    info!(category_id = %id, "Deleted category");
    Ok(())
}
