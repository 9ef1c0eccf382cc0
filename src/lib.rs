//! Scrape an anime listing site and re-expose it as JSON.
//!
//! Three operations ([`api::home`], [`api::search`], [`api::details`]) fetch
//! one upstream page each and extract typed results from it. The
//! [`router::RequestRouter`] maps `?action=` requests onto them and wraps the
//! result in an [`ApiResponse`] envelope; [`server`] serves that over HTTP and
//! [`cli`] runs the same operations from the command line.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod router;
pub mod selectors;
pub mod server;
pub mod services;
pub mod tools;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::{ApiError, Result};
pub use types::*;
