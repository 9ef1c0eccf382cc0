use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT,
};

// Chrome on Windows, the most common desktop profile.
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
const DESKTOP_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const DESKTOP_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Desktop-browser headers for every upstream request. `Referer` points at
/// the origin's root.
pub(crate) fn browser_headers(origin: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DESKTOP_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(DESKTOP_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(DESKTOP_ACCEPT_LANGUAGE),
    );

    if let Ok(referer) = HeaderValue::from_str(&format!("{}/", origin.trim_end_matches('/'))) {
        headers.insert(REFERER, referer);
    }

    headers
}
