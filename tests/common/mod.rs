#![allow(dead_code)]

use menu_board::{
    app, bootstrap,
    config::{Config, Environment},
};
use reqwest::{header, Client, StatusCode};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const ADMIN_EMAIL: &str = "admin@x.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        secret: "test-secret".to_string(),
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        environment: Environment::Production,
        seed_menu: false,
        body_limit: 10 * 1024 * 1024,
    }
}

/// Fresh in-memory database with the schema and admin account in place.
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn test_db() -> DatabaseConnection {
    let config = test_config();
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    bootstrap(&db, &config)
        .await
        .expect("Failed to bootstrap database");
    db
}

pub struct TestApp {
    pub address: String,
    pub db: DatabaseConnection,
    pub client: Client,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Same as `spawn_app`, for tests that need a non-default config.
pub async fn spawn_app_with(config: Config) -> TestApp {
    let db = test_db().await;
    let router = app(db.clone(), config);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = format!(
        "http://{}",
        listener.local_addr().expect("Listener has no address")
    );

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server crashed");
    });

    TestApp {
        address,
        db,
        client: Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn admin_token(&self) -> String {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({
                "email": ADMIN_EMAIL,
                "password": ADMIN_PASSWORD
            }))
            .send()
            .await
            .expect("Failed to send login request");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response
            .json::<Value>()
            .await
            .expect("Failed to parse login response JSON");

        body["token"]
            .as_str()
            .expect("Token not found in login response")
            .to_string()
    }

    pub fn auth_headers(token: &str) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))
                .expect("Failed to create Authorization header"),
        );
        headers
    }

    pub async fn create_category(&self, token: &str, name: &str) -> Value {
        let response = self
            .client
            .post(self.url("/api/categories"))
            .headers(Self::auth_headers(token))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to send create category request");

        assert_eq!(response.status(), StatusCode::CREATED);
        response
            .json::<Value>()
            .await
            .expect("Failed to parse category JSON")
    }

    pub async fn create_item(&self, token: &str, name: &str, price: f64, category_id: &str) -> Value {
        let response = self
            .client
            .post(self.url("/api/menu"))
            .headers(Self::auth_headers(token))
            .json(&json!({
                "name": name,
                "description": format!("{name} description"),
                "price": price,
                "category": category_id
            }))
            .send()
            .await
            .expect("Failed to send create item request");

        assert_eq!(response.status(), StatusCode::CREATED);
        response
            .json::<Value>()
            .await
            .expect("Failed to parse menu item JSON")
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::OK);
        response.json::<Value>().await.expect("Failed to parse JSON")
    }
}
