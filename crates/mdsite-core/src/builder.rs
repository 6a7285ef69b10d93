//! Document builder.
//!
//! Drives block classification and inline tokenization, and assembles the
//! resulting elements under a single `div` root.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::block::{parse_blocks, Block, BlockKind};
use crate::inline::{tokenize_with_options, SpanKind, TextSpan};
use crate::node::Element;
use crate::options::Options;
use crate::Result;

/// Leading `1. `-style ordinal of an ordered list item
static ORDINAL_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());

/// Build an element tree with default options
pub fn build(document: &str) -> Result<Element> {
    build_with_options(document, &Options::default())
}

/// Build an element tree for a whole document. The root is always a `div`.
pub fn build_with_options(document: &str, options: &Options) -> Result<Element> {
    let blocks = parse_blocks(document);
    debug!(blocks = blocks.len(), "building document");

    let children = blocks
        .iter()
        .map(|block| block_to_element(block, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(Element::parent("div", children))
}

fn block_to_element(block: &Block, options: &Options) -> Result<Element> {
    debug!(kind = ?block.kind, len = block.text.len(), "converting block");

    match block.kind {
        BlockKind::Heading(level) => {
            // `#` x level plus one space
            let content = &block.text[level as usize + 1..];
            let tag = format!("h{}", level);
            Ok(Element::parent(&tag, inline_elements(content, options)?))
        }

        BlockKind::Code => Ok(code_element(block)),

        BlockKind::Quote => {
            let content = block
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Element::parent("blockquote", inline_elements(&content, options)?))
        }

        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .map(|line| -> Result<Element> {
                    let content = line.strip_prefix("- ").unwrap_or(line);
                    Ok(Element::parent("li", inline_elements(content, options)?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Element::parent("ul", items))
        }

        BlockKind::OrderedList => {
            let items = block
                .lines()
                .map(|line| -> Result<Element> {
                    let content = ORDINAL_PREFIX_RE.replace(line, "");
                    Ok(Element::parent("li", inline_elements(&content, options)?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Element::parent("ol", items))
        }

        BlockKind::Paragraph => {
            let content = block
                .lines()
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(Element::parent("p", inline_elements(&content, options)?))
        }
    }
}

/// Fenced code is kept literal: no inline tokenization.
fn code_element(block: &Block) -> Element {
    let lines: Vec<&str> = block.lines().collect();
    let inner = match lines.len() {
        0..=2 => String::new(),
        n => lines[1..n - 1].join("\n"),
    };

    let mut content = inner.trim_end_matches('\n').to_string();
    content.push('\n');

    Element::parent("pre", vec![Element::leaf("code", &content)])
}

fn inline_elements(text: &str, options: &Options) -> Result<Vec<Element>> {
    Ok(tokenize_with_options(text, options)?
        .iter()
        .map(span_to_element)
        .collect())
}

/// Convert a single span into a leaf element
pub fn span_to_element(span: &TextSpan) -> Element {
    let target = span.target.as_deref().unwrap_or_default();

    match span.kind {
        SpanKind::Plain => Element::text(&span.content),
        SpanKind::Bold => Element::leaf("b", &span.content),
        SpanKind::Italic => Element::leaf("i", &span.content),
        SpanKind::Code => Element::leaf("code", &span.content),
        SpanKind::Link => {
            Element::leaf_with_attrs("a", Some(span.content.as_str()), vec![("href", target)])
        }
        SpanKind::Image => Element::leaf_with_attrs(
            "img",
            None,
            vec![("src", target), ("alt", span.content.as_str())],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::UnderscoreStyle;
    use crate::MdsiteError;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> String {
        build(markdown).unwrap().render().unwrap()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let root = build("# Hello\n\nThis is a paragraph").unwrap();
        assert_eq!(root.tag(), Some("div"));
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].tag(), Some("h1"));
        assert_eq!(root.children()[1].tag(), Some("p"));
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(render("### Third **level**"), "<div><h3>Third <b>level</b></h3></div>");
        assert_eq!(render("###### Six"), "<div><h6>Six</h6></div>");
    }

    #[test]
    fn test_code_block_is_literal() {
        let root = build("```py\ndef f():\n    return 1\n```").unwrap();
        let pre = &root.children()[0];
        assert_eq!(pre.tag(), Some("pre"));

        let code = &pre.children()[0];
        assert_eq!(code.tag(), Some("code"));
        assert_eq!(code.value(), Some("def f():\nreturn 1\n"));
    }

    #[test]
    fn test_code_block_skips_inline_markup() {
        assert_eq!(
            render("```\nlet **x** = `y`;\nodd ` tick\n```"),
            "<div><pre><code>let **x** = `y`;\nodd ` tick\n</code></pre></div>"
        );
    }

    #[test]
    fn test_empty_code_block() {
        assert_eq!(render("```\n```"), "<div><pre><code>\n</code></pre></div>");
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            render("> first line\n>second **line**"),
            "<div><blockquote>first line\nsecond <b>line</b></blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            render("- one\n- `two`"),
            "<div><ul><li>one</li><li><code>two</code></li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("1. one\n2. [two](/2)"),
            "<div><ol><li>one</li><li><a href=\"/2\">two</a></li></ol></div>"
        );
    }

    #[test]
    fn test_paragraph_joins_lines() {
        assert_eq!(
            render("first line\nsecond line"),
            "<div><p>first line second line</p></div>"
        );
    }

    #[test]
    fn test_degraded_list_is_paragraph() {
        assert_eq!(render("- one\ntwo"), "<div><p>- one two</p></div>");
    }

    #[test]
    fn test_image_and_link_rendering() {
        assert_eq!(
            render("See ![logo](/logo.png) and [docs](https://docs.rs)"),
            "<div><p>See <img src=\"/logo.png\" alt=\"logo\"></img> and <a href=\"https://docs.rs\">docs</a></p></div>"
        );
    }

    #[test]
    fn test_underscore_styles() {
        assert_eq!(render("an _emphasis_"), "<div><p>an <b>emphasis</b></p></div>");

        let options = Options {
            underscore_style: UnderscoreStyle::Italic,
        };
        let root = build_with_options("an _emphasis_", &options).unwrap();
        assert_eq!(root.render().unwrap(), "<div><p>an <i>emphasis</i></p></div>");
    }

    #[test]
    fn test_unmatched_delimiter_fails_build() {
        assert!(matches!(
            build("# Title\n\nbroken `code"),
            Err(MdsiteError::UnmatchedDelimiter { .. })
        ));
    }

    #[test]
    fn test_empty_quote_fails_render() {
        let root = build(">").unwrap();
        assert!(matches!(root.render(), Err(MdsiteError::Structural(_))));
    }

    #[test]
    fn test_empty_document_fails_render() {
        let root = build("\n\n").unwrap();
        assert!(root.children().is_empty());
        assert!(matches!(root.render(), Err(MdsiteError::Structural(_))));
    }

    #[test]
    fn test_render_is_idempotent() {
        let root = build("# Title\n\n- a\n- **b**\n\n```\ncode\n```").unwrap();
        assert_eq!(root.render().unwrap(), root.render().unwrap());
    }

    #[test]
    fn test_span_to_element() {
        let plain = span_to_element(&TextSpan::plain("text"));
        assert_eq!(plain.tag(), None);
        assert_eq!(plain.value(), Some("text"));

        let link = span_to_element(&TextSpan::with_target("click", SpanKind::Link, "https://example.com"));
        assert_eq!(link.tag(), Some("a"));
        assert_eq!(link.value(), Some("click"));
        assert_eq!(link.attr("href"), Some("https://example.com"));

        let image = span_to_element(&TextSpan::with_target("alt text", SpanKind::Image, "/img.png"));
        assert_eq!(image.tag(), Some("img"));
        assert_eq!(image.value(), None);
        assert_eq!(
            image.attributes().iter().collect::<Vec<_>>(),
            vec![
                (&"src".to_string(), &"/img.png".to_string()),
                (&"alt".to_string(), &"alt text".to_string()),
            ]
        );

        assert_eq!(span_to_element(&TextSpan::new("it", SpanKind::Italic)).tag(), Some("i"));
        assert_eq!(span_to_element(&TextSpan::new("x=1", SpanKind::Code)).tag(), Some("code"));
    }
}
