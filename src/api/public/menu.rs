use axum::{
    extract::{Path, Query},
    routing::get,
    Extension, Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::extract::parse_id;
use crate::error::AppError;
use crate::models::MenuItemView;
use crate::services;

pub fn menu_router() -> Router {
    Router::new()
        .route("/menu", get(get_menu))
        .route("/menu/:id", get(get_menu_item))
}

async fn get_menu(
    Query(params): Query<MenuQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<MenuItemView>>, AppError> {
    let items = match params.category.as_deref() {
        Some(category) => {
            let category_id = parse_id(category, "category")?;
            services::menu::list_menu_items_in_category(&*db, category_id).await?
        }
        None => services::menu::list_menu_items(&*db).await?,
    };

    Ok(Json(items))
}

async fn get_menu_item(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<MenuItemView>, AppError> {
    let id = parse_id(&id, "menu item")?;
    Ok(Json(services::menu::get_menu_item(&*db, id).await?))
}

#[derive(Deserialize)]
struct MenuQuery {
    category: Option<String>,
}
