//! Projection of sample subtrees

use serde_json::Value;

/// Resolve a dotted path such as `data` or `$.result.0.items`
///
/// Numeric segments index into arrays. An empty path is the value itself.
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").or_else(|| path.strip_prefix('$')).unwrap_or(path);
    if path.is_empty() {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Project every body onto `data_path`; bodies without it are skipped
pub fn project(bodies: &[Value], data_path: &str) -> Vec<Value> {
    let nodes: Vec<Value> = bodies
        .iter()
        .filter_map(|body| resolve(body, data_path))
        .cloned()
        .collect();

    if nodes.len() < bodies.len() {
        tracing::debug!(
            skipped = bodies.len() - nodes.len(),
            data_path,
            "bodies without the data path were skipped"
        );
    }
    nodes
}

/// Values of key `name` across object nodes; absent keys contribute nothing
pub fn field_samples(nodes: &[Value], name: &str) -> Vec<Value> {
    nodes
        .iter()
        .filter_map(|node| node.as_object()?.get(name))
        .cloned()
        .collect()
}
