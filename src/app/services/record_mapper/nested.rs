//! Dotted-path expansion into JSON object trees

use serde_json::{Map, Value};

/// Set a string leaf at a dotted path, creating intermediate objects
///
/// Path segments name nested objects; the final segment receives the value as
/// a JSON string. Intermediate objects are created on demand.
///
/// Colliding paths are last-write-wins: a leaf already stored where the path
/// needs an intermediate node is silently replaced by a fresh object, and a
/// leaf written over an existing subtree discards it. Callers may rely on
/// this ordering-dependent behavior, so it is preserved as is.
///
/// An empty path is a no-op.
pub fn set_nested(root: &mut Map<String, Value>, path: &[&str], value: &str) {
    let Some((leaf, parents)) = path.split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        let child = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !child.is_object() {
            *child = Value::Object(Map::new());
        }
        node = match child {
            Value::Object(map) => map,
            _ => unreachable!("child was just replaced with an object"),
        };
    }

    node.insert(leaf.to_string(), Value::String(value.to_string()));
}
