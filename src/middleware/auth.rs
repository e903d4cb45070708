use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::repository;

const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Guards the admin write routes. Expects `Authorization: Bearer <token>` issued by login.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthMiddlewareError::MissingToken)?;

    let claims = validate_token(&state.db, token, &state.secret).await?;
    debug!(user_id = %claims.sub, "Authorized admin request");

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

#[derive(Clone, Debug)]
pub struct AuthState {
    pub db: Arc<DatabaseConnection>,
    pub secret: Arc<str>,
}

pub fn generate_token(
    user_id: Uuid,
    email: &str,
    secret: &str,
) -> Result<String, AuthMiddlewareError> {
    let exp = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_LIFETIME_HOURS))
        .ok_or(AuthMiddlewareError::GenerationFail)?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_owned(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthMiddlewareError::GenerationFail)
}

/// Signature and expiry are checked first, then the subject must still be a stored user.
pub async fn validate_token(
    db: &DatabaseConnection,
    token: &str,
    secret: &str,
) -> Result<Claims, AuthMiddlewareError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|err| {
        warn!(reason = %err, "Rejected admin token");
        AuthMiddlewareError::ValidationFail
    })?
    .claims;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthMiddlewareError::InvalidUser)?;
    match repository::user::find_by_id(db, user_id).await? {
        Some(_) => Ok(claims),
        None => Err(AuthMiddlewareError::InvalidUser),
    }
}

#[derive(Error, Debug)]
pub enum AuthMiddlewareError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Invalid user")]
    InvalidUser,
    #[error("Invalid or expired token")]
    ValidationFail,
    #[error("Failed to generate token")]
    GenerationFail,
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl From<AuthMiddlewareError> for AppError {
    fn from(err: AuthMiddlewareError) -> Self {
        match err {
            AuthMiddlewareError::Database(err) => AppError::Persistence(err),
            AuthMiddlewareError::GenerationFail => {
                AppError::Internal("Failed to generate token".to_string())
            }
            other => AppError::Authentication(other.to_string()),
        }
    }
}
