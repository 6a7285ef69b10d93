//! mdsite-core - Markdown to HTML element trees
//!
//! This crate turns a small markdown dialect into a tree of HTML elements
//! and renders that tree back to an HTML string. It is used by the `mdsite`
//! generator, which handles files, templates and static assets.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────┐   ┌─────────────────┐
//! Markdown ──────▶│ split_blocks │──▶│ classify blocks │
//!                 └──────────────┘   └────────┬────────┘
//!                                             │ per block
//!                 ┌──────────────┐   ┌────────▼────────┐
//! HTML String ◀───│ Element tree │◀──│ inline tokenize │
//!                 └──────────────┘   └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::{build, extract_title};
//!
//! let markdown = "# Hello\n\nThis is **bold** text";
//! let root = build(markdown).unwrap();
//!
//! assert_eq!(
//!     root.render().unwrap(),
//!     "<div><h1>Hello</h1><p>This is <b>bold</b> text</p></div>"
//! );
//! assert_eq!(extract_title(markdown).unwrap(), "Hello");
//! ```

mod block;
mod builder;
mod inline;
mod node;
mod options;
mod title;

pub use block::{classify, parse_blocks, split_blocks, Block, BlockKind, CODE_FENCE};
pub use builder::{build, build_with_options, span_to_element};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_spans_delimiter, split_spans_images,
    split_spans_links, tokenize, tokenize_with_options, SpanKind, TextSpan,
};
pub use node::{Attributes, Element};
pub use options::{Options, UnderscoreStyle};
pub use title::extract_title;

/// Error type for markdown parsing and rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MdsiteError {
    #[error("Unmatched delimiter `{delimiter}` in: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("Invalid element tree: {0}")]
    Structural(String),

    #[error("No title heading found in document")]
    NoTitle,

    /// Reserved: span kinds are a closed enum, so leaf conversion never
    /// produces this.
    #[error("Unsupported span kind: {0}")]
    UnsupportedSpanKind(String),
}

pub type Result<T> = std::result::Result<T, MdsiteError>;
