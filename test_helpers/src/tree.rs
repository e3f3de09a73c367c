//! Structural inspection of ribbon trees.

use ribbon::{Ribbon, Value};

/// Dotted paths of every nested container, children before their parent, in
/// insertion order.
#[must_use]
pub fn container_paths(ribbon: &Ribbon) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(ribbon, "", &mut paths);
    paths
}

fn collect_paths(ribbon: &Ribbon, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in ribbon {
        if let Some(nested) = value.as_ribbon() {
            let path = if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{prefix}.{key}")
            };
            collect_paths(nested, &path, out);
            out.push(path);
        }
    }
}

/// Dotted paths of every entry, leaves included, parents before their
/// children, in insertion order.
///
/// Ribbon equality ignores key order; comparing these sequences does not.
#[must_use]
pub fn key_paths(ribbon: &Ribbon) -> Vec<String> {
    let mut paths = Vec::new();
    collect_keys(ribbon, "", &mut paths);
    paths
}

fn collect_keys(ribbon: &Ribbon, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in ribbon {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        out.push(path.clone());
        if let Some(nested) = value.as_ribbon() {
            collect_keys(nested, &path, out);
        }
    }
}

/// Number of [`ribbon::Wrapper`] nodes anywhere below `ribbon`.
#[must_use]
pub fn wrapper_count(ribbon: &Ribbon) -> usize {
    ribbon
        .values()
        .map(|value| match value {
            Value::Wrapper(wrapper) => 1 + wrapper_count(wrapper.ribbon()),
            Value::Ribbon(nested) => wrapper_count(nested),
            Value::Leaf(_) => 0,
        })
        .sum()
}

/// Number of nested containers, wrapped or bare, anywhere below `ribbon`.
#[must_use]
pub fn container_count(ribbon: &Ribbon) -> usize {
    ribbon
        .values()
        .filter_map(Value::as_ribbon)
        .map(|nested| 1 + container_count(nested))
        .sum()
}
