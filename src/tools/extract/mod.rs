//! Markup → typed results.
//!
//! Each extractor is a pure function of the page and the request parameters.
//! Missing nodes fall back to `""`/`0`; extraction itself never fails.

pub mod types;
mod utils;


pub use types::*;
use utils::*;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::selectors::{details, listing, spotlight, HREF, LAZY_SRC, SRC};
use crate::tools::dom::{Document, Node};

/// Extract the spotlight carousel and the trending section from the homepage.
pub fn extract_home(html: &str, now: DateTime<Utc>) -> HomePage {
    let doc = Document::parse(html);
    home_from(&doc.root(), now)
}

/// Extract search result cards. `query` and `page` are echoed back.
pub fn extract_search(html: &str, query: &str, page: u32) -> SearchPage {
    let doc = Document::parse(html);
    search_from(&doc.root(), query, page)
}

/// Extract a title page. `id` is the caller's id, never one read from the page.
pub fn extract_details(html: &str, id: &str) -> AnimeDetails {
    let doc = Document::parse(html);
    details_from(&doc.root(), id)
}

pub fn home_from<N: Node>(root: &N, now: DateTime<Utc>) -> HomePage {
    let spotlight = root
        .select(spotlight::ITEM)
        .iter()
        .enumerate()
        .map(|(idx, slide)| SpotlightEntry {
            id: id_from_href(&attr_of(slide, spotlight::LINK, &[HREF])),
            title: text_of(slide, spotlight::TITLE),
            description: text_of(slide, spotlight::DESCRIPTION),
            poster: attr_of(slide, spotlight::COVER, &[LAZY_SRC, SRC]),
            rank: idx as u32 + 1,
        })
        .collect();

    let trending = root
        .select(listing::TRENDING_ITEM)
        .iter()
        .map(|card| listing_entry(card, false))
        .collect();

    HomePage {
        spotlight,
        trending,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub fn search_from<N: Node>(root: &N, query: &str, page: u32) -> SearchPage {
    let results = root
        .select(listing::SEARCH_ITEM)
        .iter()
        .map(|card| listing_entry(card, true))
        .collect();

    SearchPage {
        results,
        current_page: page,
        query: query.to_string(),
    }
}

pub fn details_from<N: Node>(root: &N, id: &str) -> AnimeDetails {
    AnimeDetails {
        id: id.to_string(),
        title: text_of(root, details::TITLE),
        // Full-size image; the lazy-load attribute holds a thumbnail here.
        poster: attr_of(root, details::POSTER, &[SRC]),
        description: text_of(root, details::DESCRIPTION),
        kind: labelled_value(root, details::INFO_LABEL, details::TYPE_LABEL),
        status: labelled_value(root, details::INFO_LABEL, details::STATUS_LABEL),
        genres: root
            .select(details::GENRE)
            .iter()
            .map(|a| a.text())
            .collect(),
        episode_counts: counts_of(root, details::SUB, details::DUB),
    }
}
