use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3333;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_SESSION_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Base URL clients use to reach this server, used for local avatar links.
    pub public_url: String,
    pub upload_dir: PathBuf,
    /// When set, avatars are stored in object storage instead of `upload_dir`.
    pub object_storage_url: Option<String>,
    /// Kafka REST proxy; event publishing is disabled when unset.
    pub kafka_rest_url: Option<String>,

    pub session_token_secret: String,
    pub session_token_ttl_seconds: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let port = match get("PORT") {
            Some(value) => parse_var("PORT", value)?,
            None => DEFAULT_PORT,
        };

        let session_token_ttl_seconds = match get("SESSION_TOKEN_TTL_SECONDS") {
            Some(value) => parse_var("SESSION_TOKEN_TTL_SECONDS", value)?,
            None => DEFAULT_SESSION_TOKEN_TTL_SECONDS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            public_url: get("PUBLIC_URL").unwrap_or_else(|| format!("http://localhost:{}", port)),
            upload_dir: PathBuf::from(
                get("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            object_storage_url: get("OBJECT_STORAGE_URL"),
            kafka_rest_url: get("KAFKA_REST_URL"),
            session_token_secret: required("SESSION_TOKEN_SECRET")?,
            session_token_ttl_seconds,
        })
    }
}

fn parse_var<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}
