//! Request Router
//!
//! Turns one inbound request (method + query parameters) into a status code
//! and a JSON envelope. The HTTP server in [`crate::server`] only adapts this
//! to sockets.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::http::{Method, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api;
use crate::error::{ApiError, Result};
use crate::services::log::{ActivityLog, LogEntry};
use crate::tools::fetch::Fetcher;
use crate::types::ApiResponse;

/// CORS headers set on every reply.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Home,
    Search,
    Details,
    /// Absent or unrecognised: answer with the endpoint catalog.
    Catalog,
}

impl Action {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("home") => Action::Home,
            Some("search") => Action::Search,
            Some("details") => Action::Details,
            _ => Action::Catalog,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Home => "home",
            Action::Search => "search",
            Action::Details => "details",
            Action::Catalog => "catalog",
        }
    }
}

/// The parameters the router reads; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub action: Action,
    pub query: Option<String>,
    pub page: u32,
    pub id: Option<String>,
}

impl RequestParams {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        // Blank values count as missing; others pass through untouched.
        let non_empty = |key: &str| params.get(key).filter(|v| !v.trim().is_empty()).cloned();

        Self {
            action: Action::parse(params.get("action").map(|s| s.as_str())),
            query: non_empty("query"),
            page: parse_page(params.get("page").map(|s| s.as_str())),
            id: non_empty("id"),
        }
    }
}

/// Page number, 1 when absent, unparsable or below 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// What the router decided. `body` is `None` only for pre-flight requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            body: None,
        }
    }

    fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }
}

pub struct RequestRouter {
    fetcher: Arc<dyn Fetcher>,
    log: Arc<dyn ActivityLog>,
}

impl RequestRouter {
    pub fn new(fetcher: Arc<dyn Fetcher>, log: Arc<dyn ActivityLog>) -> Self {
        Self { fetcher, log }
    }

    pub async fn handle(&self, method: &Method, query: &HashMap<String, String>) -> Reply {
        if *method == Method::OPTIONS {
            return Reply::preflight();
        }

        let params = RequestParams::from_query(query);
        let fetcher = self.fetcher.as_ref();
        let start_time = Instant::now();

        match params.action {
            Action::Catalog => Reply::json(StatusCode::OK, catalog()),
            Action::Home => self.finish(params.action, start_time, api::home(fetcher).await),
            Action::Search => {
                let query = params.query.as_deref().unwrap_or("");
                let result = api::search(fetcher, query, params.page).await;
                self.finish(params.action, start_time, result)
            }
            Action::Details => {
                let id = params.id.as_deref().unwrap_or("");
                let result = api::details(fetcher, id).await;
                self.finish(params.action, start_time, result)
            }
        }
    }

    /// Wrap an extractor result in the envelope and pick the status.
    fn finish<T: Serialize>(&self, action: Action, start_time: Instant, res: Result<T>) -> Reply {
        let body = res.and_then(|data| Ok(serde_json::to_value(ApiResponse::ok(data))?));
        match body {
            Ok(body) => {
                let details = format!("ok in {}ms", start_time.elapsed().as_millis());
                self.log.record(LogEntry::info(action.as_str(), Some(&details)));
                Reply::json(StatusCode::OK, body)
            }
            Err(e) => self.failure(action, e),
        }
    }

    fn failure(&self, action: Action, err: ApiError) -> Reply {
        if err.is_loggable() {
            let details = format!("failed: {err}");
            self.log.record(LogEntry::error(action.as_str(), Some(&details)));
        }
        let body = json!({ "success": false, "error": err.to_string() });
        Reply::json(err.status_code(), body)
    }
}

/// Static description of the endpoints, served for unknown actions.
pub fn catalog() -> Value {
    json!({
        "success": true,
        "data": {
            "name": "aniscrape",
            "description": "Anime listing scraper API",
            "endpoints": [
                {
                    "action": "home",
                    "method": "GET",
                    "path": "/?action=home",
                    "description": "Spotlight carousel and trending titles from the homepage"
                },
                {
                    "action": "search",
                    "method": "GET",
                    "path": "/?action=search&query=<text>&page=<n>",
                    "description": "Search titles; page defaults to 1",
                    "required": ["query"]
                },
                {
                    "action": "details",
                    "method": "GET",
                    "path": "/?action=details&id=<titleId>",
                    "description": "Details of one title",
                    "required": ["id"]
                }
            ]
        }
    })
}
