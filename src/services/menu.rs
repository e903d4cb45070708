use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::entities::{category, menu_item};
use crate::error::AppError;
use crate::models::MenuItemView;
use crate::repository;
use crate::services::normalize_optional;

const MISSING_FIELDS: &str = "All fields are required";
const BAD_PRICE: &str = "Price must be a positive number";
const BAD_CATEGORY: &str = "Invalid category";

static IMAGE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:data:image/[a-zA-Z0-9.+-]+;base64,[A-Za-z0-9+/=\r\n]+|https?://\S+|/\S*)$")
        .unwrap()
});

/// Forms send prices as text, API callers as numbers. Both are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    fn is_blank(&self) -> bool {
        matches!(self, PriceInput::Text(text) if text.trim().is_empty())
    }

    /// Strictly positive finite prices only.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            PriceInput::Number(value) => *value,
            PriceInput::Text(text) => text.trim().parse::<f64>().ok()?,
        };

        (value.is_finite() && value > 0.0).then_some(value)
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

/// A category given either by id or as the whole embedded object the list endpoint returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Embedded { id: String },
}

impl CategoryRef {
    fn raw_id(&self) -> &str {
        match self {
            CategoryRef::Id(id) | CategoryRef::Embedded { id } => id.trim(),
        }
    }

    pub fn resolve(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(self.raw_id()).map_err(|_| AppError::Validation(BAD_CATEGORY.to_string()))
    }
}

impl From<Uuid> for CategoryRef {
    fn from(id: Uuid) -> Self {
        CategoryRef::Id(id.to_string())
    }
}

/// Body of both create and update. On update an absent `imageUrl` keeps the stored
/// image while an explicit `null` or blank string removes it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

struct ValidItem {
    name: String,
    description: String,
    price: f64,
    category: category::Model,
    image_url: Option<Option<String>>,
}

fn normalize_image_url(raw: Option<&str>) -> Result<Option<String>, AppError> {
    match normalize_optional(raw) {
        Some(url) if !IMAGE_URL_REGEX.is_match(&url) => {
            Err(AppError::Validation("Invalid image URL".to_string()))
        }
        url => Ok(url),
    }
}

async fn validate_input<C: ConnectionTrait>(
    db: &C,
    mut input: MenuItemInput,
) -> Result<ValidItem, AppError> {
    //caps apply to what gets stored
    input.name = input.name.map(|name| name.trim().to_owned());
    input.description = input.description.map(|text| text.trim().to_owned());
    input.validate()?;

    let name = input.name.as_deref().unwrap_or_default();
    let description = input.description.as_deref().unwrap_or_default();
    let (Some(price), Some(category_ref)) = (input.price.as_ref(), input.category.as_ref()) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };
    if name.is_empty() || description.is_empty() || price.is_blank() || category_ref.raw_id().is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }

    let price = price
        .parse()
        .ok_or_else(|| AppError::Validation(BAD_PRICE.to_string()))?;

    let category = repository::category::find_by_id(db, category_ref.resolve()?)
        .await?
        .ok_or_else(|| AppError::Validation(BAD_CATEGORY.to_string()))?;

    let image_url = match input.image_url.as_ref() {
        Some(raw) => Some(normalize_image_url(raw.as_deref())?),
        None => None,
    };

    Ok(ValidItem {
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        category,
        image_url,
    })
}

fn not_found() -> AppError {
    AppError::NotFound("Menu item not found".to_string())
}

pub async fn list_menu_items<C: ConnectionTrait>(db: &C) -> Result<Vec<MenuItemView>, AppError> {
    let rows = repository::menu_item::find_all_expanded(db, None).await?;
    Ok(rows
        .into_iter()
        .map(|(item, category)| MenuItemView::new(item, category))
        .collect())
}

pub async fn list_menu_items_in_category<C: ConnectionTrait>(
    db: &C,
    category_id: Uuid,
) -> Result<Vec<MenuItemView>, AppError> {
    if repository::category::find_by_id(db, category_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "No category with {category_id} id was found"
        )));
    }

    let rows = repository::menu_item::find_all_expanded(db, Some(category_id)).await?;
    Ok(rows
        .into_iter()
        .map(|(item, category)| MenuItemView::new(item, category))
        .collect())
}

pub async fn get_menu_item<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<MenuItemView, AppError> {
    let (item, category) = repository::menu_item::find_expanded(db, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(MenuItemView::new(item, category))
}

pub async fn create_menu_item<C: ConnectionTrait>(
    db: &C,
    input: MenuItemInput,
) -> Result<MenuItemView, AppError> {
    let valid = validate_input(db, input).await?;
    let now = Utc::now();

    let model = menu_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(valid.name),
        description: Set(valid.description),
        price: Set(valid.price),
        image_url: Set(valid.image_url.flatten()),
        category_id: Set(valid.category.id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let item = repository::menu_item::insert(db, model)
        .await
        .map_err(|err| AppError::from_write(err, BAD_CATEGORY))?;

    info!(item_id = %item.id, category_id = %item.category_id, "Created menu item");
    Ok(MenuItemView::new(item, valid.category))
}

pub async fn update_menu_item<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    input: MenuItemInput,
) -> Result<MenuItemView, AppError> {
    let existing = repository::menu_item::find_by_id(db, id)
        .await?
        .ok_or_else(not_found)?;
    let valid = validate_input(db, input).await?;

    let mut item: menu_item::ActiveModel = existing.into();
    item.name = Set(valid.name);
    item.description = Set(valid.description);
    item.price = Set(valid.price);
    item.category_id = Set(valid.category.id);
    if let Some(image_url) = valid.image_url {
        item.image_url = Set(image_url);
    }
    item.updated_at = Set(Utc::now());

    let item = repository::menu_item::update(db, item)
        .await
        .map_err(|err| AppError::from_write(err, BAD_CATEGORY))?;

    info!(item_id = %item.id, "Updated menu item");
    Ok(MenuItemView::new(item, valid.category))
}

/// Single statement, so a failure never leaves a half-deleted item behind.
pub async fn delete_menu_item<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), AppError> {
    let removed = repository::menu_item::delete(db, id).await?;
    if removed == 0 {
        return Err(not_found());
    }

    info!(item_id = %id, "Deleted menu item");
    Ok(())
}
