use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::PublicUser;
use crate::repository;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks an email/password pair against the stored hash. Issues nothing by itself,
/// the caller decides what a successful check is worth.
pub async fn login<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<PublicUser, AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let email = normalize_email(email);
    if !email.contains('@') {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    let Some(user) = repository::user::find_by_email(db, &email).await? else {
        warn!(email = %email, "Login attempt for unknown account");
        return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
    };

    if user.check_hash(password).is_err() {
        warn!(user_id = %user.id, "Login attempt with wrong password");
        return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    info!(user_id = %user.id, "Admin logged in");
    Ok(PublicUser {
        id: user.id,
        email: user.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  ADMIN@X.com "), "admin@x.com");
        assert_eq!(normalize_email("a@b.c"), "a@b.c");
    }
}
