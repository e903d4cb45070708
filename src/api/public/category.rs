use axum::{extract::Path, routing::get, Extension, Json, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::api::extract::parse_id;
use crate::error::AppError;
use crate::models::CategoryView;
use crate::services;

pub fn category_router() -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/:id", get(get_category))
}

async fn get_categories(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<CategoryView>>, AppError> {
    let categories = services::category::list_categories(&*db).await?;
    Ok(Json(categories))
}

async fn get_category(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<CategoryView>, AppError> {
    let id = parse_id(&id, "category")?;
    Ok(Json(services::category::get_category(&*db, id).await?))
}
