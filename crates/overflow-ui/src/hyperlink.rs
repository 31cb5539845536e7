//! Turns URL-shaped substrings of user text into links.

use std::sync::LazyLock;

use dioxus::prelude::*;
use regex::Regex;

// Markdown-style `[label](url)` or a bare http(s) URL.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\[(?P<label>[^\]]+)\]\((?P<href>https?://[^\s)]+)\)|(?P<bare>https?://[^\s<>"]+)"#,
    )
    .expect("link pattern is valid")
});

/// Punctuation that ends a sentence rather than a bare URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// A run of user text: either plain or a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link { href: String, label: String },
}

impl Segment {
    /// What the reader sees.
    pub fn text(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Link { label, .. } => label,
        }
    }
}

fn link(href: &str, label: &str) -> Segment {
    Segment::Link {
        href: href.to_string(),
        label: label.to_string(),
    }
}

/// Split `text` into plain text and links, preserving order.
///
/// Text outside links is kept byte for byte; no empty text segments are
/// emitted.
pub fn handle_hyperlink(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in LINK_PATTERN.captures_iter(text) {
        let (start, end, segment) =
            match (caps.name("label"), caps.name("href"), caps.name("bare")) {
                (Some(label), Some(href), _) => {
                    let Some(whole) = caps.get(0) else { continue };
                    (whole.start(), whole.end(), link(href.as_str(), label.as_str()))
                }
                (_, _, Some(bare)) => {
                    let url = bare.as_str().trim_end_matches(TRAILING_PUNCTUATION);
                    (bare.start(), bare.start() + url.len(), link(url, url))
                }
                _ => continue,
            };

        if start > cursor {
            segments.push(Segment::Text(text[cursor..start].to_string()));
        }
        segments.push(segment);
        cursor = end;
    }

    if cursor < text.len() {
        segments.push(Segment::Text(text[cursor..].to_string()));
    }
    segments
}

#[derive(Props, Clone, PartialEq)]
pub struct HyperlinkedProps {
    pub text: String,
}

/// User text with its URLs rendered as links that open in a new tab.
#[component]
pub fn Hyperlinked(props: HyperlinkedProps) -> Element {
    let segments = handle_hyperlink(&props.text);

    rsx! {
        {segments.into_iter().map(render_segment)}
    }
}

fn render_segment(segment: Segment) -> Element {
    match segment {
        Segment::Text(text) => rsx! { "{text}" },
        Segment::Link { href, label } => rsx! {
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{label}"
            }
        },
    }
}
