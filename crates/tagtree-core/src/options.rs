//! Configuration options for both serializers

/// Markup output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Single line, no structural whitespace
    Compact,
    /// One tag per line, two spaces per depth level
    #[default]
    Indented,
}

/// How a sequence stored under a mapping key is laid out in a value tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceStyle {
    /// The key tag wraps one `item` tag per element
    #[default]
    Wrapped,
    /// The key tag is repeated once per element (RSS style).
    /// An empty sequence under a key emits nothing.
    Repeated,
}

/// Options for markup rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output layout
    pub mode: RenderMode,

    /// Depth of the root element in indented mode
    pub depth: usize,

    /// Escape `& < > "` in attribute values and `& < >` in text.
    /// Off by default: content is inserted verbatim.
    pub escape: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Indented,
            depth: 0,
            escape: false,
        }
    }
}

impl RenderOptions {
    pub fn compact() -> Self {
        Self {
            mode: RenderMode::Compact,
            ..Default::default()
        }
    }

    pub fn indented() -> Self {
        Self::default()
    }
}

/// Options for value tree serialization
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Indent unit repeated once per nesting level
    pub indent: String,

    /// Emit `<?xml version="1.0" ?>` before the root tag
    pub declaration: bool,

    /// Layout of sequences held by mapping keys
    pub sequence_style: SequenceStyle,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            declaration: true,
            sequence_style: SequenceStyle::Wrapped,
        }
    }
}
