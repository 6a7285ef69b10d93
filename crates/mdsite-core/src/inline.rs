//! Inline tokenization.
//!
//! Turns a run of text into typed spans. Each stage only re-splits plain
//! spans, so earlier stages win: text inside `**bold**` is never scanned for
//! links, and so on.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::{Options, UnderscoreStyle};
use crate::{MdsiteError, Result};

/// `![alt](url)`, alt may be empty
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// `[text](url)`; matches preceded by `!` are rejected in `extract_markdown_links`
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed fragment of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    /// URL for links and images
    pub target: Option<String>,
}

impl TextSpan {
    pub fn new(content: &str, kind: SpanKind) -> Self {
        Self {
            content: content.to_string(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: &str) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn with_target(content: &str, kind: SpanKind, target: &str) -> Self {
        Self {
            content: content.to_string(),
            kind,
            target: Some(target.to_string()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Tokenize text with default options
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    tokenize_with_options(text, &Options::default())
}

/// Tokenize text into spans: bold, underscore, code, links, then images
pub fn tokenize_with_options(text: &str, options: &Options) -> Result<Vec<TextSpan>> {
    let underscore_kind = match options.underscore_style {
        UnderscoreStyle::Bold => SpanKind::Bold,
        UnderscoreStyle::Italic => SpanKind::Italic,
    };

    let spans = vec![TextSpan::plain(text)];
    let spans = split_spans_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, "_", underscore_kind)?;
    let spans = split_spans_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_spans_links(spans);
    let spans = split_spans_images(spans);
    Ok(spans)
}

/// Split plain spans on a delimiter. Odd-indexed parts become `kind`, empty
/// parts are dropped.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MdsiteError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.content.clone(),
            });
        }

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            result.push(TextSpan::new(part, part_kind));
        }
    }

    Ok(result)
}

/// Find `![alt](url)` pairs in document order
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Find `[text](url)` pairs in document order, skipping images
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    let mut matches = Vec::new();
    let mut start = 0;

    while let Some(caps) = LINK_RE.captures_at(text, start) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte, so this stays on a char boundary
            start = whole.start() + 1;
            continue;
        }
        matches.push((caps[1].to_string(), caps[2].to_string()));
        start = whole.end();
    }

    matches
}

/// Split plain spans on `[text](url)` into link spans
pub fn split_spans_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, SpanKind::Link, extract_markdown_links, |text, url| {
        format!("[{}]({})", text, url)
    })
}

/// Split plain spans on `![alt](url)` into image spans
pub fn split_spans_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, SpanKind::Image, extract_markdown_images, |alt, url| {
        format!("![{}]({})", alt, url)
    })
}

/// Re-locate each extracted match by its literal markup, scanning forward
/// from the end of the previous match. Matches that cannot be found are
/// skipped.
fn split_spans_pattern<E, F>(spans: Vec<TextSpan>, kind: SpanKind, extract: E, literal: F) -> Vec<TextSpan>
where
    E: Fn(&str) -> Vec<(String, String)>,
    F: Fn(&str, &str) -> String,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let matches = extract(&span.content);
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let content = span.content.as_str();
        let mut cursor = 0;

        for (text, url) in &matches {
            let markup = literal(text, url);
            let Some(offset) = content[cursor..].find(&markup) else {
                continue;
            };

            let before = &content[cursor..cursor + offset];
            if !before.is_empty() {
                result.push(TextSpan::plain(before));
            }
            result.push(TextSpan::with_target(text, kind, url));
            cursor += offset + markup.len();
        }

        let rest = &content[cursor..];
        if !rest.is_empty() {
            result.push(TextSpan::plain(rest));
        }
    }

    result
}
