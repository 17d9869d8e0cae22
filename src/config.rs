use std::env;
use std::str::FromStr;

use axum::http::{HeaderName, HeaderValue, Method, header};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::auth::{API_KEY_HEADER, ApiKey};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://courses.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:4000",
    "http://localhost:3000",
    "https://yourproduction.com",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub api_key: ApiKey,
    pub cors_origins: Vec<String>,
    pub body_limit: usize,
}

impl AppConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            api_key,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            body_limit: DEFAULT_BODY_LIMIT_BYTES,
        }
    }

    /// Reads the process environment. `API_KEY` has no default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("API_KEY")
            .ok()
            .and_then(|secret| ApiKey::new(secret))
            .ok_or(ConfigError::Missing("API_KEY"))?;

        let mut config = Self::new(api_key);

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(port) = parse_var("PORT")? {
            config.port = port;
        }
        if let Some(limit) = parse_var("BODY_LIMIT_BYTES")? {
            config.body_limit = limit;
        }
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            config.cors_origins = split_origins(&origins);
        }

        Ok(config)
    }

    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let mut origins = Vec::with_capacity(self.cors_origins.len());
        for origin in &self.cors_origins {
            let value = origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.clone(),
                })?;
            origins.push(value);
        }

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                HeaderName::from_static(API_KEY_HEADER),
            ])
            .allow_credentials(true))
    }
}

fn parse_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(None),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
