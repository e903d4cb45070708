pub mod admin;
pub mod extract;
pub mod public;

use axum::{
    extract::DefaultBodyLimit, middleware::from_fn_with_state, routing::get, Extension, Json,
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::logging::logging_middleware;
use admin::admin_api_router;
use public::public_api_router;

pub fn create_api_router(db: Arc<DatabaseConnection>, config: Arc<Config>) -> Router {
    let api = public_api_router().merge(admin_api_router(db.clone(), config.clone()));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(from_fn_with_state(config.clone(), logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(db))
        .layer(Extension(config))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
