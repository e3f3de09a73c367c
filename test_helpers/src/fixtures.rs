//! Ribbon fixtures built from plain data.

use anyhow::{Context, Result};
use ribbon::Ribbon;
use serde_json::{Value, json};

/// Builds a ribbon from a plain JSON object.
///
/// # Errors
///
/// Returns an error when `plain` is not an object.
pub fn ribbon_from(plain: Value) -> Result<Ribbon> {
    Ribbon::from_plain(plain).context("fixture must be a JSON object")
}

/// Service defaults used as the base layer in merge scenarios.
#[must_use]
pub fn service_defaults() -> Value {
    json!({
        "name": "registry",
        "server": {
            "host": "127.0.0.1",
            "port": 8080,
            "tls": {"enabled": false},
        },
        "log": {"level": "info", "targets": ["stdout"]},
    })
}

/// Overrides layered on top of [`service_defaults`].
#[must_use]
pub fn service_overrides() -> Value {
    json!({
        "server": {
            "port": 9090,
            "tls": {"enabled": true, "cert": "/etc/registry/cert.pem"},
        },
        "log": {"targets": ["stdout", "file"]},
        "features": {"search": true},
    })
}

/// Builds a tree `depth` levels deep where every level holds a `leaf` entry
/// and `width` nested containers keyed `n0`, `n1`, ...
///
/// # Errors
///
/// Propagates accessor failures, which only occur if the builder itself is
/// broken.
pub fn deep_tree(depth: usize, width: usize) -> Result<Ribbon> {
    let mut root = Ribbon::new();
    fill(&mut root, depth, width)?;
    Ok(root)
}

fn fill(node: &mut Ribbon, depth: usize, width: usize) -> Result<()> {
    node.put("leaf", i64::try_from(depth)?);
    if depth == 0 {
        return Ok(());
    }
    for idx in 0..width {
        fill(node.child(format!("n{idx}"))?, depth - 1, width)?;
    }
    Ok(())
}
