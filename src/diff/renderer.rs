//! Renderers for diff trees
//!
//! This module provides the stylish (indented), plain (one line per change)
//! and json (structured) renderers. All three walk the tree in its sorted
//! order and never reorder keys themselves.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::types::{DiffNode, NodeKind};
use super::value::{Mapping, Value};
use crate::error::Result;

/// Columns added per nesting level in stylish output
const INDENT_SIZE: usize = 4;

/// Columns taken by the change marker, carved out of the indent
const MARKER_WIDTH: usize = 2;

const MARKER_ADDED: &str = "+ ";
const MARKER_REMOVED: &str = "- ";
const MARKER_BLANK: &str = "  ";

const COMPLEX_VALUE: &str = "[complex value]";

/// Trait for diff renderers
pub trait DiffRenderer {
    /// Render the diff tree to a string
    fn render(&self, nodes: &[DiffNode]) -> Result<String>;
}

/// Hierarchical renderer with `+`/`-` markers and brace-delimited nesting
pub struct StylishRenderer;

impl Default for StylishRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StylishRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render without the `Result` wrapper; this renderer cannot fail
    pub fn render_to_string(&self, nodes: &[DiffNode]) -> String {
        let mut output = String::from("{\n");
        self.render_nodes(nodes, 1, &mut output);
        output.push('}');
        output
    }

    fn render_nodes(&self, nodes: &[DiffNode], depth: usize, output: &mut String) {
        for node in nodes {
            match &node.kind {
                NodeKind::Added { new_value } => {
                    self.render_line(output, depth, MARKER_ADDED, &node.key, new_value)
                }
                NodeKind::Removed { old_value } => {
                    self.render_line(output, depth, MARKER_REMOVED, &node.key, old_value)
                }
                NodeKind::Changed {
                    old_value,
                    new_value,
                } => {
                    self.render_line(output, depth, MARKER_REMOVED, &node.key, old_value);
                    self.render_line(output, depth, MARKER_ADDED, &node.key, new_value);
                }
                NodeKind::Unchanged { value } => {
                    self.render_line(output, depth, MARKER_BLANK, &node.key, value)
                }
                NodeKind::Nested { children } => {
                    output.push_str(&marker_indent(depth));
                    output.push_str(MARKER_BLANK);
                    output.push_str(&node.key);
                    output.push_str(": {\n");
                    self.render_nodes(children, depth + 1, output);
                    output.push_str(&block_indent(depth));
                    output.push_str("}\n");
                }
            }
        }
    }

    fn render_line(&self, output: &mut String, depth: usize, marker: &str, key: &str, value: &Value) {
        output.push_str(&marker_indent(depth));
        output.push_str(marker);
        output.push_str(key);
        output.push_str(": ");
        output.push_str(&self.format_value(value, depth));
        output.push('\n');
    }

    /// Format a value found at `depth`; mappings expand into an inline block
    fn format_value(&self, value: &Value, depth: usize) -> String {
        match value {
            Value::Mapping(map) => self.format_mapping(map, depth),
            _ => value.to_json_string(),
        }
    }

    fn format_mapping(&self, map: &Mapping, depth: usize) -> String {
        if map.is_empty() {
            return "{}".to_string();
        }

        let mut output = String::from("{\n");
        let entry_indent = block_indent(depth + 1);

        for (key, value) in map {
            output.push_str(&entry_indent);
            output.push_str(key);
            output.push_str(": ");
            output.push_str(&self.format_value(value, depth + 1));
            output.push('\n');
        }

        output.push_str(&block_indent(depth));
        output.push('}');
        output
    }
}

impl DiffRenderer for StylishRenderer {
    fn render(&self, nodes: &[DiffNode]) -> Result<String> {
        Ok(self.render_to_string(nodes))
    }
}

/// Indentation before a marker at `depth`
fn marker_indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_SIZE - MARKER_WIDTH)
}

/// Full indentation for unmarked lines at `depth`
fn block_indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_SIZE)
}

/// Flat renderer: one sentence per added, removed or updated property
pub struct PlainRenderer;

impl Default for PlainRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render without the `Result` wrapper; this renderer cannot fail
    pub fn render_to_string(&self, nodes: &[DiffNode]) -> String {
        let mut lines = Vec::new();
        self.collect_lines(nodes, "", &mut lines);
        lines.join("\n")
    }

    fn collect_lines(&self, nodes: &[DiffNode], parent_path: &str, lines: &mut Vec<String>) {
        for node in nodes {
            let path = property_path(parent_path, &node.key);

            match &node.kind {
                NodeKind::Added { new_value } => lines.push(format!(
                    "Property '{}' was added with value: {}",
                    path,
                    self.format_value(new_value)
                )),
                NodeKind::Removed { .. } => {
                    lines.push(format!("Property '{}' was removed", path))
                }
                NodeKind::Changed {
                    old_value,
                    new_value,
                } => lines.push(format!(
                    "Property '{}' was updated. From {} to {}",
                    path,
                    self.format_value(old_value),
                    self.format_value(new_value)
                )),
                NodeKind::Nested { children } => self.collect_lines(children, &path, lines),
                NodeKind::Unchanged { .. } => {}
            }
        }
    }

    fn format_value(&self, value: &Value) -> String {
        match value {
            Value::Mapping(_) => COMPLEX_VALUE.to_string(),
            Value::String(s) => format!("'{}'", s),
            _ => value.to_string(),
        }
    }
}

impl DiffRenderer for PlainRenderer {
    fn render(&self, nodes: &[DiffNode]) -> Result<String> {
        Ok(self.render_to_string(nodes))
    }
}

/// Dot-joined path of a key below `parent_path`
fn property_path(parent_path: &str, key: &str) -> String {
    if parent_path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent_path, key)
    }
}

/// Structured renderer: the diff tree as a keyed JSON object
pub struct JsonRenderer;

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DiffRenderer for JsonRenderer {
    fn render(&self, nodes: &[DiffNode]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&NodeMap(nodes))?)
    }
}

/// Siblings serialized as `{key: entry, ...}` in tree order
struct NodeMap<'a>(&'a [DiffNode]);

impl Serialize for NodeMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for node in self.0 {
            map.serialize_entry(&node.key, &NodeEntry(&node.kind))?;
        }
        map.end()
    }
}

/// One node's `{type, ...}` object; field order is fixed per kind
struct NodeEntry<'a>(&'a NodeKind);

impl Serialize for NodeEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let kind = self.0;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", kind.name())?;

        match kind {
            NodeKind::Added { new_value: value }
            | NodeKind::Removed { old_value: value }
            | NodeKind::Unchanged { value } => map.serialize_entry("value", value)?,
            NodeKind::Changed {
                old_value,
                new_value,
            } => {
                map.serialize_entry("oldValue", old_value)?;
                map.serialize_entry("newValue", new_value)?;
            }
            NodeKind::Nested { children } => map.serialize_entry("children", &NodeMap(children))?,
        }

        map.end()
    }
}
