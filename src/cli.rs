use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::api;
use crate::config::{Config, DEFAULT_BIND, DEFAULT_LOG_FILTER, DEFAULT_ORIGIN};
use crate::router::RequestRouter;
use crate::server;
use crate::services::log::{init_tracing, ActivityLog, TracingLog};
use crate::tools::fetch::{Fetcher, ReqwestFetcher};
use crate::ApiResponse;

#[derive(Parser)]
#[command(name = "aniscrape", version, about = "Anime listing scraper (JSON only)")]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args)]
struct GlobalArgs {
    /// Upstream origin to scrape
    #[arg(long, global = true, env = "ANISCRAPE_ORIGIN", default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true, env = "ANISCRAPE_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the JSON API over HTTP
    Serve {
        #[arg(long, env = "ANISCRAPE_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },
    /// Print the homepage spotlight and trending sections
    Home,
    /// Print one page of search results
    Search(SearchArgs),
    /// Print the details of one title
    Details { id: String },
}

#[derive(Args)]
struct SearchArgs {
    query: String,
    #[arg(long, default_value_t = 1)]
    page: u32,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let bind = match &cli.cmd {
        Command::Serve { bind } => *bind,
        _ => Config::default().bind,
    };
    let config = Config::new(&cli.global.origin, bind, &cli.global.log_level)
        .context("Invalid configuration")?;

    init_tracing(&config.log_filter)?;

    let log: Arc<dyn ActivityLog> = Arc::new(TracingLog);
    let fetcher: Arc<dyn Fetcher> = Arc::new(
        ReqwestFetcher::new(&config.origin, log.clone())
            .context("Failed to create upstream client")?,
    );

    debug!(fetcher = fetcher.name(), origin = %config.origin, "upstream ready");

    match cli.cmd {
        Command::Serve { .. } => {
            let router = Arc::new(RequestRouter::new(fetcher, log));
            server::serve(&config, router).await
        }
        Command::Home => finish(api::home(fetcher.as_ref()).await),
        Command::Search(SearchArgs { query, page }) => {
            finish(api::search(fetcher.as_ref(), &query, page).await)
        }
        Command::Details { id } => finish(api::details(fetcher.as_ref(), &id).await),
    }
}

/// Print the envelope either way; a failed command still returns the error
/// so `main` exits non-zero.
fn finish<T: serde::Serialize>(res: crate::Result<T>) -> anyhow::Result<()> {
    match res {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => {
            print_json(ApiResponse::<()>::err(e.to_string()))?;
            Err(e.into())
        }
    }
}

fn print_json<T: serde::Serialize>(val: T) -> anyhow::Result<()> {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(&val)?);
    Ok(())
}
