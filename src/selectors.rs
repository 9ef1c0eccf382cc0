//! Shared Selectors
//!
//! Every structural selector the extractors run against the upstream markup.
//! When the site changes its layout, this is the file to touch.

/// Upstream paths, relative to the configured origin.
pub mod paths {
    pub const HOME: &str = "/home";

    /// `query` must already be percent-encoded.
    pub fn search(query: &str, page: u32) -> String {
        format!("/search?keyword={query}&page={page}")
    }

    /// `id` must already be percent-encoded.
    pub fn details(id: &str) -> String {
        format!("/{id}")
    }
}

/// Homepage spotlight carousel.
pub mod spotlight {
    pub const ITEM: &str = "#slider .swiper-slide";
    pub const LINK: &str = ".desi-buttons a[href]";
    pub const TITLE: &str = ".desi-head-title";
    pub const DESCRIPTION: &str = ".desi-description";
    pub const COVER: &str = ".deslide-cover img";
}

/// One anime card, shared by the trending section and search results.
pub mod listing {
    pub const TRENDING_ITEM: &str = "#trending-home .flw-item";
    pub const SEARCH_ITEM: &str = ".film_list-wrap .flw-item";

    pub const LINK: &str = ".film-name a[href]";
    pub const POSTER: &str = "img.film-poster-img";
    pub const TYPE: &str = ".fd-infor .fdi-item:not(.fdi-duration)";
    pub const DURATION: &str = ".fd-infor .fdi-duration";
    pub const SUB: &str = ".tick-sub";
    pub const DUB: &str = ".tick-dub";
}

/// Title page.
pub mod details {
    pub const TITLE: &str = "#ani_detail .anisc-detail .film-name";
    pub const POSTER: &str = "#ani_detail .anisc-poster img.film-poster-img";
    pub const DESCRIPTION: &str = "#ani_detail .film-description .text";
    pub const INFO_LABEL: &str = "#ani_detail .anisc-info .item .item-head";
    pub const GENRE: &str = "#ani_detail .anisc-info .item-list a";
    pub const SUB: &str = "#ani_detail .anisc-detail .tick-sub";
    pub const DUB: &str = "#ani_detail .anisc-detail .tick-dub";

    pub const TYPE_LABEL: &str = "Type";
    pub const STATUS_LABEL: &str = "Status";
}

/// Lazy-loaded images keep the real URL here; `src` holds a placeholder.
pub const LAZY_SRC: &str = "data-src";
pub const SRC: &str = "src";
pub const HREF: &str = "href";
