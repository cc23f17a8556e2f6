//! Output sinks and the site writer.
//!
//! A [`Sink`] stores named text files. [`SiteWriter`] renders pages and data
//! files and hands the text to whichever sink it was constructed with:
//! [`FileSink`] for a directory on disk, [`MemorySink`] for tests and previews.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tagtree_core::{render_with, serialize_tree_with, Element, RenderOptions, TreeOptions, Value};

use crate::{Result, TagtreeError};

/// Destination for generated text files
pub trait Sink {
    /// Store `contents` under `name`, replacing any previous file
    fn write(&mut self, name: &str, contents: &str) -> Result<()>;
}

/// Writes files below a root directory, creating parent directories as needed
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Sink for FileSink {
    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        let path = self.root.join(name);
        let io_error = |source: std::io::Error| TagtreeError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&path, contents).map_err(io_error)?;

        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}

/// Keeps files in memory, in the order they were first written
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: IndexMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn files(&self) -> &IndexMap<String, String> {
        &self.files
    }

    pub fn into_files(self) -> IndexMap<String, String> {
        self.files
    }
}

impl Sink for MemorySink {
    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        tracing::debug!(name, bytes = contents.len(), "stored file in memory");
        self.files.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Renders pages and data files into a [`Sink`]
pub struct SiteWriter<S: Sink> {
    sink: S,
    render_options: RenderOptions,
    tree_options: TreeOptions,
}

impl<S: Sink> SiteWriter<S> {
    /// Writer with indented HTML and default XML options
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, RenderOptions::default(), TreeOptions::default())
    }

    pub fn with_options(sink: S, render_options: RenderOptions, tree_options: TreeOptions) -> Self {
        Self {
            sink,
            render_options,
            tree_options,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn render_options_mut(&mut self) -> &mut RenderOptions {
        &mut self.render_options
    }

    pub fn tree_options(&self) -> &TreeOptions {
        &self.tree_options
    }

    pub fn tree_options_mut(&mut self) -> &mut TreeOptions {
        &mut self.tree_options
    }

    /// Render `page` (indented by default) and store it
    pub fn save_html(&mut self, name: &str, page: &Element) -> Result<()> {
        tracing::debug!(name, root = page.name(), mode = ?self.render_options.mode, "rendering page");
        let html = render_with(page, &self.render_options);
        self.sink.write(name, &html)
    }

    /// Serialize `data` as nested XML tags under `root_name` and store it
    pub fn write_xml(&mut self, name: &str, root_name: &str, data: &Value) -> Result<()> {
        tracing::debug!(name, root = root_name, "serializing value tree");
        let xml = serialize_tree_with(root_name, data, &self.tree_options);
        self.sink.write(name, &xml)
    }

    /// Store `data` as JSON indented by four spaces, non-ASCII text kept as is
    pub fn write_json(&mut self, name: &str, data: &Value) -> Result<()> {
        let mut buf = Vec::with_capacity(256);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        data.to_json().serialize(&mut serializer)?;

        // serde_json only emits valid UTF-8
        let json = String::from_utf8_lossy(&buf);
        self.sink.write(name, &json)
    }

    pub fn write_css(&mut self, name: &str, css: &str) -> Result<()> {
        self.sink.write(name, css)
    }

    pub fn write_js(&mut self, name: &str, js: &str) -> Result<()> {
        self.sink.write(name, js)
    }
}
