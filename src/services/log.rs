use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub event: String,
    pub details: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, event: &str, details: Option<&str>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        }
    }

    pub fn info(event: &str, details: Option<&str>) -> Self {
        Self::new(LogLevel::Info, event, details)
    }

    pub fn error(event: &str, details: Option<&str>) -> Self {
        Self::new(LogLevel::Error, event, details)
    }
}

/// Where the fetcher and router report what happened.
///
/// Recording must never fail or block the caller; implementations swallow
/// their own errors.
pub trait ActivityLog: Send + Sync {
    fn record(&self, entry: LogEntry);
}

/// Forwards entries to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ActivityLog for TracingLog {
    fn record(&self, entry: LogEntry) {
        let details = entry.details.as_deref().unwrap_or("");
        match entry.level {
            LogLevel::Info => tracing::info!(event = %entry.event, "{details}"),
            LogLevel::Error => tracing::error!(event = %entry.event, "{details}"),
        }
    }
}

/// Install the global `tracing` subscriber. `RUST_LOG` wins over `filter`.
///
/// Output goes to stderr so the one-shot commands keep stdout for JSON.
pub fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .map_err(|e| anyhow::anyhow!("invalid log filter {filter:?}: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    Ok(())
}
