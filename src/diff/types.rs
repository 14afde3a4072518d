//! Data types for the diff tree
//!
//! A diff tree is an ordered sequence of [`DiffNode`]s, one per key, sorted by
//! key at every level. Nodes are plain values: built once by the builder and
//! only read afterwards by the renderers.

use super::value::Value;

/// Classification of a single key, carrying the values that kind needs
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Key exists only in the new document
    Added { new_value: Value },
    /// Key exists only in the old document
    Removed { old_value: Value },
    /// Key exists in both with different values
    Changed { old_value: Value, new_value: Value },
    /// Key exists in both with equal values
    Unchanged { value: Value },
    /// Key maps to a mapping on both sides; compared recursively
    Nested { children: Vec<DiffNode> },
}

impl NodeKind {
    /// Get the name used for this kind in structured output
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Added { .. } => "added",
            NodeKind::Removed { .. } => "removed",
            NodeKind::Changed { .. } => "changed",
            NodeKind::Unchanged { .. } => "unchanged",
            NodeKind::Nested { .. } => "nested",
        }
    }
}

/// One compared key
#[derive(Debug, Clone, PartialEq)]
pub struct DiffNode {
    /// Mapping key this node represents, unique among its siblings
    pub key: String,

    /// Classification and payload
    pub kind: NodeKind,
}

impl DiffNode {
    pub fn added(key: impl Into<String>, new_value: Value) -> Self {
        Self::new(key, NodeKind::Added { new_value })
    }

    pub fn removed(key: impl Into<String>, old_value: Value) -> Self {
        Self::new(key, NodeKind::Removed { old_value })
    }

    pub fn changed(key: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self::new(key, NodeKind::Changed { old_value, new_value })
    }

    pub fn unchanged(key: impl Into<String>, value: Value) -> Self {
        Self::new(key, NodeKind::Unchanged { value })
    }

    pub fn nested(key: impl Into<String>, children: Vec<DiffNode>) -> Self {
        Self::new(key, NodeKind::Nested { children })
    }

    fn new(key: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Value on the old side (set for Removed, Changed and Unchanged)
    #[allow(dead_code)]
    pub fn old_value(&self) -> Option<&Value> {
        match &self.kind {
            NodeKind::Removed { old_value } | NodeKind::Changed { old_value, .. } => {
                Some(old_value)
            }
            NodeKind::Unchanged { value } => Some(value),
            NodeKind::Added { .. } | NodeKind::Nested { .. } => None,
        }
    }

    /// Value on the new side (set for Added and Changed)
    #[allow(dead_code)]
    pub fn new_value(&self) -> Option<&Value> {
        match &self.kind {
            NodeKind::Added { new_value } | NodeKind::Changed { new_value, .. } => Some(new_value),
            _ => None,
        }
    }

    /// Child nodes (non-empty only for Nested)
    #[allow(dead_code)]
    pub fn children(&self) -> &[DiffNode] {
        match &self.kind {
            NodeKind::Nested { children } => children,
            _ => &[],
        }
    }

    /// Whether this node or any descendant records a difference
    pub fn has_changes(&self) -> bool {
        match &self.kind {
            NodeKind::Unchanged { .. } => false,
            NodeKind::Nested { children } => children.iter().any(DiffNode::has_changes),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        let value = Value::from(json!(1));
        assert_eq!(DiffNode::added("a", value.clone()).kind.name(), "added");
        assert_eq!(DiffNode::removed("a", value.clone()).kind.name(), "removed");
        assert_eq!(DiffNode::unchanged("a", value).kind.name(), "unchanged");
        assert_eq!(DiffNode::nested("a", Vec::new()).kind.name(), "nested");
    }

    #[test]
    fn test_value_accessors() {
        let changed = DiffNode::changed("k", Value::from(json!(1)), Value::from(json!(2)));
        assert_eq!(changed.old_value(), Some(&Value::from(json!(1))));
        assert_eq!(changed.new_value(), Some(&Value::from(json!(2))));
        assert!(changed.children().is_empty());

        let added = DiffNode::added("k", Value::Null);
        assert_eq!(added.old_value(), None);
        assert_eq!(added.new_value(), Some(&Value::Null));

        let unchanged = DiffNode::unchanged("k", Value::Bool(true));
        assert_eq!(unchanged.old_value(), Some(&Value::Bool(true)));
        assert_eq!(unchanged.new_value(), None);
    }

    #[test]
    fn test_has_changes() {
        let quiet = DiffNode::nested("n", vec![DiffNode::unchanged("a", Value::Null)]);
        assert!(!quiet.has_changes());

        let noisy = DiffNode::nested(
            "n",
            vec![
                DiffNode::unchanged("a", Value::Null),
                DiffNode::nested("deep", vec![DiffNode::removed("b", Value::Null)]),
            ],
        );
        assert!(noisy.has_changes());
    }
}
