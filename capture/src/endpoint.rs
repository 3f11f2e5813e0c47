//! Fixed request shape for the capture endpoint.
//!
//! Every invocation sends the same request: `POST /capturar_saldo` with a
//! JSON content type and no body. Nothing here depends on earlier outcomes.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;

use crate::error::ConfigError;

pub const CAPTURE_METHOD: &str = "POST";
pub const CAPTURE_PATH: &str = "/capturar_saldo";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default base URL for native clients (local development server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Join the capture path onto an `http(s)` base URL.
///
/// Trailing slashes on the base are dropped so `http://host/` and
/// `http://host` produce the same target.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] if the base is not an
/// `http://` or `https://` URL with a host.
pub fn capture_url(base_url: &str) -> Result<String, ConfigError> {
    let base = base_url.trim().trim_end_matches('/');
    let rest = base
        .strip_prefix("http://")
        .or_else(|| base.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidBaseUrl(base_url.to_owned()))?;
    if rest.is_empty() {
        return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
    }
    Ok(format!("{base}{CAPTURE_PATH}"))
}
