//! # tagtree
//!
//! Build HTML documents in code and write them out together with XML and
//! JSON data files.
//!
//! ## Design
//!
//! The tree models and serializers live in `tagtree-core` and are re-exported
//! here, including the tag helpers ([`tags::div`], [`tags::li`], ...). This
//! crate adds:
//!
//! - **Output sinks**: a [`Sink`] is injected into a [`SiteWriter`], so the same
//!   code writes to disk ([`FileSink`]) or to memory ([`MemorySink`])
//! - **HTML import**: [`parse_html`] turns an existing fragment into an
//!   [`Element`] tree (feature `html`, on by default)
//!
//! Nothing here escapes text or attribute values unless
//! [`RenderOptions::escape`] is set.
//!
//! ## Example
//!
//! ```rust
//! use tagtree::tags::{body, h1, html, p};
//! use tagtree::{MemorySink, SiteWriter};
//!
//! let page = html([body([
//!     h1("Hello", &[("style", "color:blue;")]),
//!     p("Paragraph.", &[("class_", "text")]),
//! ])]);
//!
//! let mut writer = SiteWriter::new(MemorySink::new());
//! writer.save_html("index.html", &page).unwrap();
//!
//! let written = writer.sink().get("index.html").unwrap();
//! assert!(written.contains("<p class=\"text\">Paragraph.</p>"));
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod sink;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use sink::{FileSink, MemorySink, Sink, SiteWriter};
pub use tagtree_core::*;
pub use utilities::{is_void, VOID_ELEMENTS};

/// Error type for tagtree operations
#[derive(Debug, thiserror::Error)]
pub enum TagtreeError {
    #[error("Invalid element: {0}")]
    Build(#[from] BuildError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TagtreeError>;
