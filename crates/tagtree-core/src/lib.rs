//! tagtree-core - element trees, value trees and their serializers
//!
//! This crate holds the two tree models and the code that turns them into
//! nested text. The [`tags`] module adds short constructors for common HTML
//! elements. The crate is used by `tagtree`, which adds HTML import and output
//! sinks on top.
//!
//! # Architecture
//!
//! ```text
//! ElementBuilder ──▶ Element tree ──render──▶ markup (compact / indented)
//!
//! Value tree ──serialize_tree──▶ nested XML tags
//! ```
//!
//! # Example
//!
//! ```rust
//! use tagtree_core::{render, ElementBuilder, RenderMode};
//!
//! let list = ElementBuilder::new("ul")
//!     .attr("class_", "menu")
//!     .child(ElementBuilder::new("li").text("Home").build().unwrap())
//!     .child(ElementBuilder::new("li").text("About").build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     render(&list, RenderMode::Compact),
//!     r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
//! );
//! assert_eq!(
//!     render(&list, RenderMode::Indented),
//!     "<ul class=\"menu\">\n  <li>Home</li>\n  <li>About</li>\n</ul>"
//! );
//! ```

mod ast;
mod attrs;
mod builder;
mod options;
mod serialize;
pub mod tags;
mod tree;
mod value;

pub use ast::{Content, Element, Node};
pub use attrs::{normalize_attributes, normalize_key, Attributes, TRAILING_MARKER};
pub use builder::{build_element, ElementBuilder};
pub use options::{RenderMode, RenderOptions, SequenceStyle, TreeOptions};
pub use serialize::{render, render_at, render_with};
pub use tree::{serialize_tree, serialize_tree_with, ITEM_TAG};
pub use value::{Scalar, Value};

/// Error returned when an element cannot be constructed
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("element name must not be empty")]
    EmptyName,
}
