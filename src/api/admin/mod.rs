pub mod category;
pub mod menu;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::middleware::auth::AuthState;
use category::admin_category_router;
use menu::admin_menu_router;

/// Write routes. Every one of them sits behind the bearer token check.
pub fn admin_api_router(db: Arc<DatabaseConnection>, config: Arc<Config>) -> Router {
    let auth_state = AuthState {
        db,
        secret: Arc::from(config.secret.as_str()),
    };

    Router::new()
        .merge(admin_category_router(auth_state.clone()))
        .merge(admin_menu_router(auth_state))
}
