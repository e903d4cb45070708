use axum::{
    extract::Path,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{post, put},
    Extension, Json, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::api::extract::{parse_id, ApiJson};
use crate::error::AppError;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::models::{MenuItemView, MessageBody};
use crate::services::{self, menu::MenuItemInput};

pub fn admin_menu_router(auth_state: AuthState) -> Router {
    Router::new()
        .route("/menu", post(create_menu_item))
        .route("/menu/:id", put(update_menu_item).delete(delete_menu_item))
        .route_layer(from_fn_with_state(auth_state, auth_middleware))
}

async fn create_menu_item(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    ApiJson(payload): ApiJson<MenuItemInput>,
) -> Result<(StatusCode, Json<MenuItemView>), AppError> {
    let item = services::menu::create_menu_item(&*db, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_menu_item(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    ApiJson(payload): ApiJson<MenuItemInput>,
) -> Result<Json<MenuItemView>, AppError> {
    let id = parse_id(&id, "menu item")?;
    Ok(Json(services::menu::update_menu_item(&*db, id, payload).await?))
}

async fn delete_menu_item(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id, "menu item")?;
    services::menu::delete_menu_item(&*db, id).await?;

    Ok(Json(MessageBody {
        message: "Menu item deleted successfully".to_string(),
    }))
}
