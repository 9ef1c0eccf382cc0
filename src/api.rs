use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::selectors::paths;
use crate::tools::extract::{self, AnimeDetails, HomePage, SearchPage};
use crate::tools::fetch::Fetcher;

pub const QUERY_REQUIRED: &str = "Query parameter required";
pub const ID_REQUIRED: &str = "ID parameter required";

/* ------------ extraction entrypoints ------------ */

/// Spotlight and trending sections of the upstream homepage.
pub async fn home(fetcher: &dyn Fetcher) -> Result<HomePage> {
    let start_time = Instant::now();
    let html = fetcher.fetch(paths::HOME).await?;
    let page = extract::extract_home(&html, Utc::now());
    debug!(
        spotlight = page.spotlight.len(),
        trending = page.trending.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "home extracted"
    );
    Ok(page)
}

/// One page of search results. An empty `query` is rejected before any
/// upstream request; `page` values below 1 are treated as 1.
pub async fn search(fetcher: &dyn Fetcher, query: &str, page: u32) -> Result<SearchPage> {
    if query.trim().is_empty() {
        return Err(ApiError::validation(QUERY_REQUIRED));
    }
    let page = page.max(1);

    let start_time = Instant::now();
    let path = paths::search(&urlencoding::encode(query), page);
    let html = fetcher.fetch(&path).await?;
    let result = extract::extract_search(&html, query, page);
    debug!(
        query,
        page,
        results = result.results.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "search extracted"
    );
    Ok(result)
}

/// Title page for `id`. An empty `id` is rejected before any upstream
/// request.
pub async fn details(fetcher: &dyn Fetcher, id: &str) -> Result<AnimeDetails> {
    if id.trim().is_empty() {
        return Err(ApiError::validation(ID_REQUIRED));
    }

    let start_time = Instant::now();
    let html = fetcher.fetch(&paths::details(&urlencoding::encode(id))).await?;
    let result = extract::extract_details(&html, id);
    debug!(
        id,
        genres = result.genres.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "details extracted"
    );
    Ok(result)
}
