//! Element tree
//!
//! This module defines the nodes of a markup document. An [`Element`] is built
//! once (see [`crate::builder`]) and then only read by the serializers.

use crate::attrs::{normalize_attributes, Attributes};

/// A child of an element: either a nested element or a plain text leaf
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested element
    Element(Element),

    /// Text leaf, emitted verbatim
    Text(String),
}

/// The content carried by a non-self-closing element
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Literal text (possibly empty), rendered on the same line as the tags
    Text(String),

    /// Ordered child nodes
    Children(Vec<Node>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

/// A markup element: tag name, normalized attributes, content and the
/// self-closing flag.
///
/// Self-closing elements ignore their content when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) content: Content,
    pub(crate) self_closing: bool,
}

impl Element {
    /// Assemble an element whose name is a non-empty literal.
    ///
    /// Attributes are normalized as in [`crate::build_element`]. Caller-supplied
    /// names go through [`crate::build_element`] or [`crate::ElementBuilder`],
    /// which reject empty names.
    pub(crate) fn from_static(
        name: &'static str,
        content: Content,
        attributes: &[(&str, &str)],
        self_closing: bool,
    ) -> Self {
        debug_assert!(!name.is_empty());
        Self {
            name: name.to_string(),
            attributes: normalize_attributes(attributes.iter().copied()),
            content,
            self_closing,
        }
    }

    /// Element with literal text content
    pub(crate) fn text_element(name: &'static str, text: impl Into<String>) -> Self {
        Self::from_static(name, Content::Text(text.into()), &[], false)
    }

    /// Self-closing element without attributes
    pub(crate) fn void(name: &'static str) -> Self {
        Self::from_static(name, Content::default(), &[], true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value by its normalized name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Child nodes, empty for text content
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children.as_slice(),
            Content::Text(_) => &[],
        }
    }

    /// Only the element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children().iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Node::text_content).collect(),
        }
    }
}

impl Node {
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}
