//! Diff tree builder
//!
//! Compares two mappings key by key and produces the ordered diff tree the
//! renderers consume.

use std::collections::BTreeSet;

use super::types::DiffNode;
use super::value::{Mapping, Value};

/// Build the diff tree for two mappings
///
/// Keys from both sides are merged and visited in ascending byte order, so
/// siblings at every level of the result are sorted. Only keys that hold a
/// mapping on both sides are recursed into; every other pair is compared with
/// deep equality, which means a mapping replaced by a scalar is `Changed`.
pub fn build_diff_tree(old: &Mapping, new: &Mapping) -> Vec<DiffNode> {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    let nodes: Vec<DiffNode> = keys
        .into_iter()
        .map(|key| classify(key, old.get(key), new.get(key)))
        .collect();

    tracing::trace!(nodes = nodes.len(), "built diff level");
    nodes
}

fn classify(key: &str, old: Option<&Value>, new: Option<&Value>) -> DiffNode {
    match (old, new) {
        (Some(old_value), None) => DiffNode::removed(key, old_value.clone()),
        (None, Some(new_value)) => DiffNode::added(key, new_value.clone()),
        (Some(Value::Mapping(old_map)), Some(Value::Mapping(new_map))) => {
            DiffNode::nested(key, build_diff_tree(old_map, new_map))
        }
        (Some(old_value), Some(new_value)) if old_value == new_value => {
            DiffNode::unchanged(key, old_value.clone())
        }
        (Some(old_value), Some(new_value)) => {
            DiffNode::changed(key, old_value.clone(), new_value.clone())
        }
        // Keys come from the union of both maps.
        (None, None) => unreachable!("key {key} missing from both mappings"),
    }
}
