use axum::{routing::post, Extension, Json, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::api::extract::ApiJson;
use crate::config::Config;
use crate::error::AppError;
use crate::middleware::auth::generate_token;
use crate::models::{LoginRequest, LoginResponse};
use crate::services;

pub fn auth_router() -> Router {
    Router::new().route("/auth/login", post(login))
}

async fn login(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Extension(config): Extension<Arc<Config>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = payload.email.as_deref().unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    let user = services::auth::login(&*db, email, password).await?;
    let token = generate_token(user.id, &user.email, &config.secret)?;

    Ok(Json(LoginResponse {
        success: true,
        user,
        token,
    }))
}
