//! HTML import.
//!
//! This module parses HTML strings and converts them to the [`Element`] tree
//! used by the rest of the crate, so existing markup can be re-rendered or
//! embedded in generated pages.

use scraper::{ElementRef, Html, Node as ScraperNode};
use tagtree_core::{Element, ElementBuilder};

use crate::utilities::is_void;
use crate::Result;

/// Parse an HTML fragment into an element tree.
///
/// The fragment is wrapped in the `<html>` root produced by the parser. Void
/// elements (`img`, `br`, ...) become self-closing, text nodes are kept
/// verbatim and comments are dropped. Attribute names pass through the usual
/// trailing `_` normalization.
///
/// # Example
///
/// ```rust
/// use tagtree::{parse_html, render, RenderMode};
///
/// let root = parse_html(r#"<p class="lead">Hello <b>World</b></p>"#).unwrap();
/// assert_eq!(
///     render(&root, RenderMode::Compact),
///     r#"<html><p class="lead">Hello <b>World</b></p></html>"#
/// );
/// ```
pub fn parse_html(html: &str) -> Result<Element> {
    let document = Html::parse_fragment(html);
    let root = scraper_to_element(document.root_element())?;
    tracing::debug!(root = root.name(), "parsed html fragment");
    Ok(root)
}

/// Convert a scraper ElementRef to our Element structure
fn scraper_to_element(element: ElementRef) -> Result<Element> {
    let tag = element.value().name();
    let mut builder = ElementBuilder::new(tag).attrs(element.value().attrs());

    if is_void(tag) {
        builder = builder.self_closing();
    }

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                builder = builder.child(text.text.to_string());
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    builder = builder.child(scraper_to_element(child_element)?);
                }
            }
            _ => {}
        }
    }

    Ok(builder.build()?)
}
