use serde::{Deserialize, Serialize};

/// Sub/dub episode counts read from the badges on a card or title page.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpisodeCounts {
    pub sub: u32,
    pub dub: u32,
}

/// One slide of the homepage carousel.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub poster: String,
    /// 1-based position on the page.
    pub rank: u32,
}

/// One anime card (trending section or search results).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    pub id: String,
    pub title: String,
    pub poster: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_counts: Option<EpisodeCounts>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDetails {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub episode_counts: EpisodeCounts,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    #[serde(default)]
    pub spotlight: Vec<SpotlightEntry>,
    #[serde(default)]
    pub trending: Vec<ListingEntry>,
    /// ISO-8601, UTC, millisecond precision.
    pub timestamp: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<ListingEntry>,
    pub current_page: u32,
    pub query: String,
}
