pub mod auth;
pub mod category;
pub mod menu;

use axum::Router;

use auth::auth_router;
use category::category_router;
use menu::menu_router;

pub fn public_api_router() -> Router {
    Router::new()
        .merge(auth_router())
        .merge(category_router())
        .merge(menu_router())
}
