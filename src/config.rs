use std::net::SocketAddr;

use url::Url;

use crate::error::{ApiError, Result};

pub const DEFAULT_ORIGIN: &str = "https://hianime.to";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "aniscrape=info,reqwest=warn,hyper=warn";

/// Runtime settings. Built from command-line flags and their environment
/// fallbacks in [`crate::cli`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream origin, without a trailing slash.
    pub origin: String,
    pub bind: SocketAddr,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn new(origin: &str, bind: SocketAddr, log_filter: &str) -> Result<Self> {
        Ok(Self {
            origin: normalize_origin(origin)?,
            bind,
            log_filter: log_filter.to_string(),
        })
    }
}

/// Validate an upstream origin: http(s), with a host, nothing after the path.
pub fn normalize_origin(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Unexpected(format!(
            "origin must be http or https: {raw}"
        )));
    }
    if url.host_str().is_none() {
        return Err(ApiError::Unexpected(format!("origin has no host: {raw}")));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ApiError::Unexpected(format!(
            "origin must not carry a query or fragment: {raw}"
        )));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
