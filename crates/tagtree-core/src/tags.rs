//! Tag helpers
//!
//! Short constructors for the HTML elements a page is usually made of. Helpers
//! taking a single `content` store text directly as the element's content, so
//! `li("One")` renders as `<li>One</li>` on one line in indented mode; passing
//! an element instead nests it as the only child.
//!
//! Attributes are given as `(key, value)` pairs and normalized like every other
//! attribute: `("class_", "x")` is emitted as `class="x"`.
//!
//! Every helper names its own tag, so only [`tag`] can fail.

use crate::ast::{Content, Element, Node};
use crate::builder::build_element;
use crate::BuildError;

/// Build an element with a caller-supplied name.
///
/// Fails only if `name` is empty.
pub fn tag<I>(
    name: &str,
    children: I,
    attributes: &[(&str, &str)],
    self_closing: bool,
) -> Result<Element, BuildError>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    let children = children.into_iter().map(Into::into).collect();
    build_element(name, children, attributes, self_closing)
}

fn with_content(
    name: &'static str,
    content: impl Into<Node>,
    attributes: &[(&str, &str)],
) -> Element {
    let content = match content.into() {
        Node::Text(text) => Content::Text(text),
        node => Content::Children(vec![node]),
    };
    Element::from_static(name, content, attributes, false)
}

fn with_children<I>(name: &'static str, children: I, attributes: &[(&str, &str)]) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    let children: Vec<Node> = children.into_iter().map(Into::into).collect();
    let content = if children.is_empty() {
        Content::default()
    } else {
        Content::Children(children)
    };
    Element::from_static(name, content, attributes, false)
}

/// Prepend `(key, value)` to the caller's attributes
fn leading<'a>(
    first: &[(&'a str, &'a str)],
    rest: &[(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    let mut all = first.to_vec();
    all.extend_from_slice(rest);
    all
}

pub fn html<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    with_children("html", children, &[])
}

/// `<head>` starting with `<meta charset="UTF-8" />`
pub fn head<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    let charset = Node::Element(meta(&[("charset", "UTF-8")]));
    let children = std::iter::once(charset).chain(children.into_iter().map(Into::into));
    with_children("head", children, &[])
}

pub fn body<I>(children: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    with_children("body", children, &[])
}

pub fn title(text: &str) -> Element {
    Element::text_element("title", text)
}

pub fn h1(content: impl Into<Node>, attributes: &[(&str, &str)]) -> Element {
    with_content("h1", content, attributes)
}

pub fn p(content: impl Into<Node>, attributes: &[(&str, &str)]) -> Element {
    with_content("p", content, attributes)
}

pub fn div<I>(children: I, attributes: &[(&str, &str)]) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    with_children("div", children, attributes)
}

pub fn ul<I>(children: I, attributes: &[(&str, &str)]) -> Element
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    with_children("ul", children, attributes)
}

pub fn li(content: impl Into<Node>, attributes: &[(&str, &str)]) -> Element {
    with_content("li", content, attributes)
}

/// Anchor; `href` is emitted before the other attributes
pub fn a(content: impl Into<Node>, href: &str, attributes: &[(&str, &str)]) -> Element {
    with_content("a", content, &leading(&[("href", href)], attributes))
}

/// Self-closing image; `src` is emitted first
pub fn img(src: &str, attributes: &[(&str, &str)]) -> Element {
    let attributes = leading(&[("src", src)], attributes);
    Element::from_static("img", Content::default(), &attributes, true)
}

pub fn br(attributes: &[(&str, &str)]) -> Element {
    Element::from_static("br", Content::default(), attributes, true)
}

pub fn meta(attributes: &[(&str, &str)]) -> Element {
    Element::from_static("meta", Content::default(), attributes, true)
}

/// Self-closing `<link>` with `href` then `rel`
pub fn link(href: &str, rel: &str, attributes: &[(&str, &str)]) -> Element {
    let attributes = leading(&[("href", href), ("rel", rel)], attributes);
    Element::from_static("link", Content::default(), &attributes, true)
}

/// Script element.
///
/// With `src` the element is empty and `src` is emitted first; otherwise the
/// inline code (or nothing) becomes its text.
pub fn script(code: Option<&str>, src: Option<&str>, attributes: &[(&str, &str)]) -> Element {
    match src {
        Some(src) => Element::from_static(
            "script",
            Content::default(),
            &leading(&[("src", src)], attributes),
            false,
        ),
        None => Element::from_static(
            "script",
            Content::Text(code.unwrap_or_default().to_string()),
            attributes,
            false,
        ),
    }
}

pub fn style(css: &str) -> Element {
    Element::text_element("style", css)
}
