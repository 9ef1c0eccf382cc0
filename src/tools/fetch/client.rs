use reqwest::Client;
use std::time::Duration;

const POOL_IDLE_TIMEOUT_SEC: u64 = 90;
const POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Build the shared upstream client.
///
/// No request timeout is set: the hosting platform's own deadline bounds a
/// slow upstream. Redirects and decompression use the client defaults.
pub(crate) fn build_client() -> Result<Client, String> {
    Client::builder()
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(|e| format!("Failed to build client: {}", e))
}
