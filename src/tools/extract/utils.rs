use url::Url;

use crate::selectors::{listing, HREF, LAZY_SRC};
use crate::tools::dom::Node;

use super::types::{EpisodeCounts, ListingEntry};

// Only used to resolve relative hrefs; the host never reaches the output.
const HREF_BASE: &str = "https://upstream.invalid/";

/// Text of the first match under `node`, or `""`.
pub(super) fn text_of<N: Node>(node: &N, selector: &str) -> String {
    node.first(selector).map(|n| n.text()).unwrap_or_default()
}

/// First non-empty attribute among `names` on the first match, or `""`.
pub(super) fn attr_of<N: Node>(node: &N, selector: &str, names: &[&str]) -> String {
    node.first(selector)
        .and_then(|n| {
            names
                .iter()
                .filter_map(|name| n.attr(name))
                .find(|v| !v.is_empty())
        })
        .unwrap_or_default()
}

/// Leading digits of a badge, so `"12"` and `"12 eps"` both read as 12.
/// Anything else is 0.
pub(super) fn parse_count(text: &str) -> u32 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

pub(super) fn counts_of<N: Node>(node: &N, sub: &str, dub: &str) -> EpisodeCounts {
    EpisodeCounts {
        sub: parse_count(&text_of(node, sub)),
        dub: parse_count(&text_of(node, dub)),
    }
}

/// Final non-empty path segment of `href`; query and fragment are ignored.
pub(super) fn id_from_href(href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }

    let resolved = Url::parse(HREF_BASE).and_then(|base| base.join(href));
    match resolved {
        Ok(url) => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .unwrap_or_default()
            .to_string(),
        Err(_) => {
            let path = href.split(['?', '#']).next().unwrap_or_default();
            path.split('/')
                .filter(|s| !s.is_empty())
                .last()
                .unwrap_or_default()
                .to_string()
        }
    }
}

/// Value next to the info row labelled `label` (`"Type:"` matches `"type"`).
pub(super) fn labelled_value<N: Node>(root: &N, label_selector: &str, label: &str) -> String {
    root.select(label_selector)
        .into_iter()
        .find(|head| {
            head.text()
                .trim_end_matches(':')
                .trim()
                .eq_ignore_ascii_case(label)
        })
        .and_then(|head| head.next_element())
        .map(|value| value.text())
        .unwrap_or_default()
}

/// Read one anime card. Search cards carry episode badges, trending ones don't.
pub(super) fn listing_entry<N: Node>(card: &N, with_counts: bool) -> ListingEntry {
    let link = card.first(listing::LINK);
    let href = link
        .as_ref()
        .and_then(|a| a.attr(HREF))
        .unwrap_or_default();
    let title = link
        .as_ref()
        .map(|a| {
            let text = a.text();
            if text.is_empty() {
                a.attr("title").unwrap_or_default()
            } else {
                text
            }
        })
        .unwrap_or_default();

    ListingEntry {
        id: id_from_href(&href),
        title,
        poster: attr_of(card, listing::POSTER, &[LAZY_SRC]),
        kind: text_of(card, listing::TYPE),
        duration: text_of(card, listing::DURATION),
        episode_counts: with_counts.then(|| counts_of(card, listing::SUB, listing::DUB)),
    }
}
