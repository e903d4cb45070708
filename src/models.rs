//! JSON shapes shared by the HTTP handlers and the client stores.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{category, menu_item};

/// A category as listed to visitors, with the number of items filed under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: Uuid,
    pub name: String,
    pub name_in_local_language: Option<String>,
    #[serde(default)]
    pub item_count: i64,
}

impl CategoryView {
    pub fn new(value: category::Model, item_count: i64) -> CategoryView {
        CategoryView {
            id: value.id,
            name: value.name,
            name_in_local_language: value.name_in_local_language,
            item_count,
        }
    }
}

/// The category embedded into every menu item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub name_in_local_language: Option<String>,
}

impl From<category::Model> for CategorySummary {
    fn from(value: category::Model) -> Self {
        CategorySummary {
            id: value.id,
            name: value.name,
            name_in_local_language: value.name_in_local_language,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: CategorySummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItemView {
    pub fn new(item: menu_item::Model, category: category::Model) -> MenuItemView {
        MenuItemView {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            image_url: item.image_url,
            category: category.into(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// The only part of a user that ever leaves the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: PublicUser,
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
