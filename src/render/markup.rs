//! Inline style-markup resolver.
//!
//! A `{...}` span inside a text value recolors that sub-span without a
//! full style object. The content splits on `|` into display text and an
//! optional explicit color; without a color the span inherits the ambient
//! accent. Parsing is a single left-to-right pass over a non-greedy
//! brace-pair pattern; an opening brace with no closing brace is literal
//! text, and nesting is not supported.

use std::sync::LazyLock;

use regex_lite::Regex;

static SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{.*?\}").expect("span pattern is valid")
});

/// One run of resolved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Colored { text: String, color: String },
}

impl Segment {
    fn colored(text: &str, color: &str) -> Self {
        Segment::Colored {
            text: text.to_string(),
            color: color.to_string(),
        }
    }
}

/// Resolve `text` into segments, substituting `accent` for spans that
/// carry no explicit color. Empty input yields no segments.
pub fn resolve_markup(text: &str, accent: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in SPAN.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Plain(text[cursor..found.start()].to_string()));
        }

        let inner = &text[found.start() + 1..found.end() - 1];
        let mut parts = inner.split('|');
        let display = parts.next().unwrap_or("");
        // An empty color part ("{text|}") also inherits the accent
        let color = parts.next().filter(|c| !c.is_empty()).unwrap_or(accent);
        segments.push(Segment::colored(display, color));

        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }

    segments
}
