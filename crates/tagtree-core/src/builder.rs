//! Element construction
//!
//! All caller-named elements go through [`build_element`] or
//! [`ElementBuilder`], which normalize attribute keys and reject empty names.

use crate::ast::{Content, Element, Node};
use crate::attrs::{normalize_attributes, normalize_key, Attributes};
use crate::BuildError;

/// Build an element from its children and raw attributes.
///
/// Non-empty `children` become the element's content, otherwise the content is
/// empty text. A self-closing element may be given children but they are never
/// rendered.
///
/// ```rust
/// use tagtree_core::{build_element, render, RenderMode};
///
/// let p = build_element("p", vec!["hi".into()], &[("class_", "lead")], false).unwrap();
/// assert_eq!(render(&p, RenderMode::Compact), r#"<p class="lead">hi</p>"#);
/// ```
pub fn build_element(
    name: &str,
    children: Vec<Node>,
    attributes: &[(&str, &str)],
    self_closing: bool,
) -> Result<Element, BuildError> {
    if name.is_empty() {
        return Err(BuildError::EmptyName);
    }

    let content = if children.is_empty() {
        Content::default()
    } else {
        Content::Children(children)
    };

    Ok(Element {
        name: name.to_string(),
        attributes: normalize_attributes(attributes.iter().copied()),
        content,
        self_closing,
    })
}

/// Fluent construction of an [`Element`]
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    name: String,
    attributes: Attributes,
    content: Content,
    self_closing: bool,
}

impl ElementBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::default(),
            self_closing: false,
        }
    }

    /// Add an attribute; a trailing `_` on the key is stripped
    pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes
            .insert(normalize_key(key).to_string(), value.into());
        self
    }

    /// Add several attributes in order
    pub fn attrs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.attributes.extend(normalize_attributes(pairs));
        self
    }

    /// Append a child node.
    ///
    /// Text set earlier with [`ElementBuilder::text`] becomes the first child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(text) if text.is_empty() => {
                self.content = Content::Children(vec![child]);
            }
            Content::Text(text) => {
                let text = std::mem::take(text);
                self.content = Content::Children(vec![Node::Text(text), child]);
            }
        }
        self
    }

    /// Append several child nodes in order
    pub fn children<I>(self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        children.into_iter().fold(self, |builder, child| builder.child(child))
    }

    /// Replace the content with literal text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    pub fn build(self) -> Result<Element, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyName);
        }

        Ok(Element {
            name: self.name,
            attributes: self.attributes,
            content: self.content,
            self_closing: self.self_closing,
        })
    }
}
