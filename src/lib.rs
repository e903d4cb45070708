//! Restaurant menu backend: public menu browsing plus an admin API for categories and items.

pub mod api;
pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod services;

use axum::Router;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::api::create_api_router;
use crate::config::Config;
use crate::entities::{seed_admin, seed_menu, setup_schema};

/// Creates missing tables, the admin account and, when asked to, the demo menu.
pub async fn bootstrap(db: &DatabaseConnection, config: &Config) -> Result<(), DbErr> {
    setup_schema(db).await?;
    seed_admin(db, config).await?;

    if config.seed_menu {
        seed_menu(db).await?;
    }

    Ok(())
}

pub fn app(db: DatabaseConnection, config: Config) -> Router {
    create_api_router(Arc::new(db), Arc::new(config))
}
