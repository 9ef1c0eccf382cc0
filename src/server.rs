use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{RawQuery, State},
    http::{HeaderName, HeaderValue, Method},
    response::{IntoResponse, Response},
    Json, Router,
};
use tracing::info;

use crate::config::Config;
use crate::router::{Reply, RequestRouter, CORS_HEADERS};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        };

        let headers = response.headers_mut();
        for (name, value) in CORS_HEADERS {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        response
    }
}

/// Decode a raw query string; the first occurrence of a key wins.
pub fn query_map(raw: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if let Some(raw) = raw {
        for (k, v) in url::form_urlencoded::parse(raw.as_bytes()) {
            params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }
    params
}

async fn handle(
    State(router): State<Arc<RequestRouter>>,
    method: Method,
    RawQuery(raw): RawQuery,
) -> Response {
    let params = query_map(raw.as_deref());
    router.handle(&method, &params).await.into_response()
}

/// Every path and method lands on the same handler.
pub fn app(router: Arc<RequestRouter>) -> Router {
    Router::new().fallback(handle).with_state(router)
}

pub async fn serve(config: &Config, router: Arc<RequestRouter>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!(addr = %config.bind, origin = %config.origin, "listening");

    axum::serve(listener, app(router))
        .await
        .context("HTTP server failed")
}
