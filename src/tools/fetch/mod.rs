mod client;
mod headers;
mod utils;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::services::log::{ActivityLog, LogEntry};

/// Source of upstream markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// GET `<origin><path>` and return the body. `path` is already
    /// percent-encoded. Non-2xx answers and network failures come back as
    /// [`ApiError::Transport`]; nothing is retried.
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// [`Fetcher`] backed by a shared `reqwest` client and a fixed origin.
pub struct ReqwestFetcher {
    client: Client,
    origin: String,
    log: Arc<dyn ActivityLog>,
}

impl ReqwestFetcher {
    pub fn new(origin: &str, log: Arc<dyn ActivityLog>) -> Result<Self> {
        let client = client::build_client().map_err(ApiError::Unexpected)?;
        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
            log,
        })
    }

    fn fail(&self, url: &str, err: ApiError) -> ApiError {
        let details = format!("GET {url} failed: {err}");
        self.log.record(LogEntry::error("fetch", Some(&details)));
        err
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        let url = utils::join_url(&self.origin, path);

        let response = match self
            .client
            .get(&url)
            .headers(headers::browser_headers(&self.origin))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                let err = ApiError::transport(None, format!("HTTP request failed: {e}"));
                return Err(self.fail(&url, err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::transport(Some(status.as_u16()), utils::describe_status(status));
            return Err(self.fail(&url, err));
        }

        match response.text().await {
            Ok(body) => Ok(body),
            Err(e) => {
                let err = ApiError::transport(
                    Some(status.as_u16()),
                    format!("Failed to read response: {e}"),
                );
                Err(self.fail(&url, err))
            }
        }
    }
}
