//! Markup tree produced by the parser.

use indexmap::IndexMap;

/// Attribute map of an element, in source order.
pub type Attributes = IndexMap<String, AttrValue>;

/// A raw attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Plain string value
    Text(String),
    /// Whitespace-separated tokens of a multi-valued attribute (e.g. `class`)
    List(Vec<String>),
}

impl AttrValue {
    /// Get as string if it's a plain value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// A parsed unit of the input document.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name as written in the source
    pub name: String,

    /// Attributes in source order
    pub attrs: Attributes,

    /// Child nodes in source order
    pub children: Vec<MarkupNode>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Builder-style child setter.
    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            MarkupNode::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Append text, merging with a trailing text node.
    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(MarkupNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(MarkupNode::Text(text.to_string()));
        }
    }
}
