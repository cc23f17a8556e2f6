//! Markup serialization
//!
//! Converts an [`Element`] tree into markup text, either on one line
//! ([`RenderMode::Compact`]) or one tag per line with two spaces of indent per
//! depth level ([`RenderMode::Indented`]).
//!
//! Attribute values and text are inserted verbatim unless
//! [`RenderOptions::escape`] is set, so a value containing `"` produces broken
//! markup. Recursion depth follows tree depth and is not bounded.

use crate::ast::{Content, Element, Node};
use crate::attrs::Attributes;
use crate::options::{RenderMode, RenderOptions};

const INDENT: &str = "  ";

/// Render an element tree in the given mode
pub fn render(element: &Element, mode: RenderMode) -> String {
    render_with(
        element,
        &RenderOptions {
            mode,
            ..Default::default()
        },
    )
}

/// Render an element tree with the root at `depth`.
/// Depth only affects indented mode.
pub fn render_at(element: &Element, mode: RenderMode, depth: usize) -> String {
    render_with(
        element,
        &RenderOptions {
            mode,
            depth,
            ..Default::default()
        },
    )
}

/// Render an element tree with explicit options
pub fn render_with(element: &Element, options: &RenderOptions) -> String {
    let mut output = String::with_capacity(256);
    match options.mode {
        RenderMode::Compact => render_compact(element, options, &mut output),
        RenderMode::Indented => render_indented(element, options, options.depth, &mut output),
    }
    output
}

fn render_compact(element: &Element, options: &RenderOptions, out: &mut String) {
    open_tag(element, options, out);
    if element.self_closing {
        out.push_str(" />");
        return;
    }
    out.push('>');

    match &element.content {
        Content::Text(text) => push_text(text, options, out),
        Content::Children(children) => {
            for child in children {
                match child {
                    Node::Element(child) => render_compact(child, options, out),
                    Node::Text(text) => push_text(text, options, out),
                }
            }
        }
    }

    close_tag(element, out);
}

fn render_indented(element: &Element, options: &RenderOptions, depth: usize, out: &mut String) {
    push_indent(depth, out);
    open_tag(element, options, out);
    if element.self_closing {
        out.push_str(" />");
        return;
    }
    out.push('>');

    match &element.content {
        Content::Text(text) => push_text(text, options, out),
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                match child {
                    Node::Element(child) => render_indented(child, options, depth + 1, out),
                    Node::Text(text) => {
                        push_indent(depth + 1, out);
                        push_text(text, options, out);
                    }
                }
                out.push('\n');
            }
            push_indent(depth, out);
        }
    }

    close_tag(element, out);
}

/// Write `<name attrs` without the closing bracket
fn open_tag(element: &Element, options: &RenderOptions, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    push_attributes(&element.attributes, options, out);
}

fn close_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

fn push_attributes(attributes: &Attributes, options: &RenderOptions, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        if options.escape {
            push_escaped(value, true, out);
        } else {
            out.push_str(value);
        }
        out.push('"');
    }
}

fn push_text(text: &str, options: &RenderOptions, out: &mut String) {
    if options.escape {
        push_escaped(text, false, out);
    } else {
        out.push_str(text);
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

pub(crate) fn push_escaped(text: &str, quotes: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
