use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

const DEFAULT_DATABASE_URL: &str = "sqlite://menu.db?mode=rwc";
const DEFAULT_ADMIN_EMAIL: &str = "admin@restaurant.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// HS256 signing key for admin session tokens.
    pub secret: String,
    pub admin_email: String,
    pub admin_password: String,
    pub environment: Environment,
    pub seed_menu: bool,
    /// Request body cap in bytes. Items may carry their image as a data-uri.
    pub body_limit: usize,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = try_load("APP_ENV", "production")?;

        Ok(Self {
            database_url: try_load("DATABASE_URL", DEFAULT_DATABASE_URL)?,
            port: try_load("PORT", "3000")?,
            secret: load_secret(),
            admin_email: try_load("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL)?,
            admin_password: var("ADMIN_PASSWORD").unwrap_or_else(|_| {
                warn!("ADMIN_PASSWORD not set, the default admin password is in use");
                DEFAULT_ADMIN_PASSWORD.to_string()
            }),
            environment,
            seed_menu: try_load("SEED_MENU", "false")?,
            body_limit: try_load("BODY_LIMIT", "10485760")?,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found");
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }
    })
}

fn load_secret() -> String {
    var("SECRET").unwrap_or_else(|_| {
        warn!("SECRET not set, generated a random one; tokens will not survive a restart");
        format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_accepts_short_and_long_names() {
        assert_eq!("dev".parse(), Ok(Environment::Development));
        assert_eq!(" Development ".parse(), Ok(Environment::Development));
        assert_eq!("prod".parse(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }
}
