//! Test doubles shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::services::log::{ActivityLog, LogEntry};
use crate::tools::fetch::Fetcher;

/// Keeps every entry in memory.
#[derive(Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ActivityLog for RecordingLog {
    fn record(&self, entry: LogEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

/// Serves canned pages by path and counts calls. Unknown paths answer 404;
/// `failing(status)` makes every call fail with that status.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    fail_status: Option<u16>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_page(mut self, path: &str, html: &str) -> Self {
        self.pages.insert(path.to_string(), html.to_string());
        self
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(path.to_string());

        if let Some(status) = self.fail_status {
            return Err(ApiError::transport(
                Some(status),
                format!("upstream responded with status {status}"),
            ));
        }
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::transport(Some(404), "upstream responded with status 404"))
    }
}
