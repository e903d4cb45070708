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
use crate::models::{CategoryView, MessageBody};
use crate::services::{
    self,
    category::{CreateCategory, UpdateCategory},
};

pub fn admin_category_router(auth_state: AuthState) -> Router {
    Router::new()
        .route("/categories", post(create_category))
        .route(
            "/categories/:id",
            put(update_category).delete(delete_category),
        )
        .route_layer(from_fn_with_state(auth_state, auth_middleware))
}

async fn create_category(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    ApiJson(payload): ApiJson<CreateCategory>,
) -> Result<(StatusCode, Json<CategoryView>), AppError> {
    let category = services::category::create_category(&*db, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    ApiJson(payload): ApiJson<UpdateCategory>,
) -> Result<Json<CategoryView>, AppError> {
    let id = parse_id(&id, "category")?;
    Ok(Json(services::category::update_category(&*db, id, payload).await?))
}

async fn delete_category(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id, "category")?;
    services::category::delete_category(&*db, id).await?;

    Ok(Json(MessageBody {
        message: "Category deleted successfully".to_string(),
    }))
}
