//! Typed DOM access for the extractors.
//!
//! Extractors only see [`Node`], so any document model can stand in for the
//! `scraper`-backed one (tests use fakes).


use scraper::{ElementRef, Html, Selector};

/// The query surface the extractors are written against.
pub trait Node: Sized {
    /// Every descendant matching `selector`, in document order. An
    /// unparsable selector matches nothing.
    fn select(&self, selector: &str) -> Vec<Self>;

    /// Text content, trimmed, with inner whitespace runs collapsed.
    fn text(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;

    /// The next sibling that is an element.
    fn next_element(&self) -> Option<Self>;

    /// First descendant matching `selector`.
    fn first(&self, selector: &str) -> Option<Self> {
        self.select(selector).into_iter().next()
    }
}

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.html.root_element())
    }
}

/// An element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> Node for HtmlNode<'a> {
    fn select(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(sel) => self.0.select(&sel).map(HtmlNode).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn text(&self) -> String {
        normalize_ws(&self.0.text().collect::<String>())
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(|v| v.trim().to_string())
    }

    fn next_element(&self) -> Option<Self> {
        self.0
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .map(HtmlNode)
    }
}

pub(crate) fn normalize_ws(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
