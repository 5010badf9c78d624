//! Helpers for configured base URLs.

use url::Url;

use crate::server::error::{config::ConfigError, internal::InternalError};

/// Parses a configured base URL, making sure it ends with a slash so that `join` appends
/// to its path instead of replacing the last segment.
pub fn parse_base_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Joins a relative path onto a base URL produced by `parse_base_url`.
pub fn join(base: &Url, path: &str) -> Result<Url, InternalError> {
    base.join(path).map_err(|source| InternalError::UrlJoin {
        base: base.to_string(),
        path: path.to_string(),
        source,
    })
}
