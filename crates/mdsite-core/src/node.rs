//! HTML element tree.
//!
//! Elements are either leaves (optional tag, optional text) or parents
//! (tag plus children). The tree is built once per document and rendered
//! to an HTML string; rendering never mutates it.

use indexmap::IndexMap;

use crate::{MdsiteError, Result};

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node of the HTML output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Element without children. A leaf with no tag renders its text raw.
    Leaf {
        tag: Option<String>,
        text: Option<String>,
        attributes: Attributes,
    },

    /// Element wrapping child elements. Must carry a tag and at least one
    /// child by the time it is rendered.
    Parent {
        tag: Option<String>,
        children: Vec<Element>,
        attributes: Attributes,
    },
}

impl Element {
    /// Create a tagged leaf element
    pub fn leaf(tag: &str, text: &str) -> Self {
        Element::Leaf {
            tag: Some(tag.to_string()),
            text: Some(text.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf that renders as raw text
    pub fn text(content: &str) -> Self {
        Element::Leaf {
            tag: None,
            text: Some(content.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf element with attributes
    pub fn leaf_with_attrs(tag: &str, text: Option<&str>, attrs: Vec<(&str, &str)>) -> Self {
        Element::Leaf {
            tag: Some(tag.to_string()),
            text: text.map(str::to_string),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create a parent element
    pub fn parent(tag: &str, children: Vec<Element>) -> Self {
        Element::Parent {
            tag: Some(tag.to_string()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Check if this is a leaf element
    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf { .. })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Element::Leaf { tag, .. } | Element::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Get the leaf text, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Element::Leaf { text, .. } => text.as_deref(),
            Element::Parent { .. } => None,
        }
    }

    /// Get the attribute map
    pub fn attributes(&self) -> &Attributes {
        match self {
            Element::Leaf { attributes, .. } | Element::Parent { attributes, .. } => attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Set an attribute, keeping the original position if it already exists
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self {
            Element::Leaf { attributes, .. } | Element::Parent { attributes, .. } => {
                attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Get all child elements (always empty for leaves)
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Leaf { .. } => &[],
            Element::Parent { children, .. } => children,
        }
    }

    /// Add a child element. Leaves are promoted to parents, dropping their text.
    pub fn add_child(&mut self, child: Element) {
        match self {
            Element::Parent { children, .. } => children.push(child),
            Element::Leaf {
                tag, attributes, ..
            } => {
                *self = Element::Parent {
                    tag: tag.take(),
                    children: vec![child],
                    attributes: std::mem::take(attributes),
                };
            }
        }
    }

    /// Get all text content from this element and descendants
    pub fn text_content(&self) -> String {
        match self {
            Element::Leaf { text, .. } => text.clone().unwrap_or_default(),
            Element::Parent { children, .. } => children
                .iter()
                .map(Element::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }

    /// Render this element and its descendants to HTML
    pub fn render(&self) -> Result<String> {
        let mut out = String::with_capacity(256);
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            Element::Leaf {
                tag,
                text,
                attributes,
            } => {
                let text = text.as_deref().unwrap_or_default();
                match tag {
                    Some(tag) => {
                        push_open_tag(tag, attributes, out);
                        out.push_str(text);
                        push_close_tag(tag, out);
                    }
                    None => out.push_str(text),
                }
            }
            Element::Parent {
                tag,
                children,
                attributes,
            } => {
                let Some(tag) = tag else {
                    return Err(MdsiteError::Structural(
                        "parent element has no tag".to_string(),
                    ));
                };
                if children.is_empty() {
                    return Err(MdsiteError::Structural(format!(
                        "parent element <{}> has no children",
                        tag
                    )));
                }

                push_open_tag(tag, attributes, out);
                for child in children {
                    child.render_into(out)?;
                }
                push_close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn push_open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !attributes.is_empty() {
        out.push(' ');
        out.push_str(&attributes_string(attributes));
    }
    out.push('>');
}

fn push_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Attributes as `key="value"` pairs. Values are written verbatim.
fn attributes_string(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}
