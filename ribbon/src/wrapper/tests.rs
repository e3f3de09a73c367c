//! Unit tests for the wrapper surface and the wrap/unwrap rewrites.

use rstest::{fixture, rstest};
use serde_json::json;

use super::{Wrapper, unwrap_all, wrap_all};
use crate::{Ribbon, RibbonError, Value};

#[fixture]
fn tree() -> Ribbon {
    Ribbon::from_plain(json!({
        "name": "svc",
        "server": {"port": 80, "tls": {"enabled": true}},
        "tags": ["a", "b"],
    }))
    .expect("fixture is an object")
}

#[rstest]
fn wrap_all_wraps_every_level(tree: Ribbon) {
    let wrapped = wrap_all(tree);
    assert!(wrapped.is_fully_wrapped());
    let server = wrapped.peek("server").expect("server entry");
    assert!(server.is_wrapped());
    let tls = server
        .as_ribbon()
        .and_then(|s| s.peek("tls"))
        .expect("tls entry");
    assert!(tls.is_wrapped());
    assert!(wrapped.peek("tags").is_some_and(Value::is_leaf));
}

#[rstest]
fn round_trip_restores_bare_tree(tree: Ribbon) -> anyhow::Result<()> {
    let original = tree.clone();
    let restored = unwrap_all(wrap_all(tree));
    anyhow::ensure!(restored.is_bare());
    anyhow::ensure!(restored == original);
    // Equality ignores key order; the rendered text does not.
    anyhow::ensure!(restored.to_json_string()? == original.to_json_string()?);
    Ok(())
}

#[rstest]
fn rewrites_are_idempotent(mut tree: Ribbon) {
    tree.wrap_all();
    let once = tree.clone();
    tree.wrap_all();
    assert!(tree.is_fully_wrapped());
    assert_eq!(tree, once);

    tree.unwrap_all();
    tree.unwrap_all();
    assert!(tree.is_bare());
}

#[rstest]
fn wrap_all_accepts_a_wrapper_root(tree: Ribbon) {
    let wrapped = wrap_all(Wrapper::new(tree));
    assert!(wrapped.is_fully_wrapped());
}

#[rstest]
fn unwrap_all_reaches_wrappers_below_bare_ribbons() -> anyhow::Result<()> {
    let mut root = Ribbon::new();
    root.child("outer")?.wrapped("inner")?.put("leaf", 1);
    anyhow::ensure!(!root.is_bare());
    let bare = unwrap_all(root);
    anyhow::ensure!(bare.is_bare());
    anyhow::ensure!(bare.to_plain() == json!({"outer": {"inner": {"leaf": 1}}}));
    Ok(())
}

#[rstest]
fn dotted_paths_vivify_and_read() -> anyhow::Result<()> {
    let mut settings = Wrapper::default();
    settings.set("db.primary.port", 5432)?;
    settings.at("db.replica")?.put("port", 5433);
    anyhow::ensure!(
        settings.lookup("db.primary.port")?.and_then(Value::as_i64) == Some(5432)
    );
    anyhow::ensure!(settings.lookup("db.missing")?.is_none());
    anyhow::ensure!(settings.peek_path(["db", "missing"]).is_none());
    Ok(())
}

#[rstest]
fn dotted_paths_reject_non_identifiers() {
    let mut settings = Wrapper::default();
    let err = settings.set("db.primary-port", 1).expect_err("hyphen");
    assert!(matches!(err, RibbonError::InvalidPath { .. }));
    assert!(settings.is_empty());
}

#[rstest]
fn dotted_paths_stop_at_leaves(tree: Ribbon) {
    let mut wrapper = Wrapper::new(tree);
    let err = wrapper.at("name.first").expect_err("name is a leaf");
    assert!(matches!(err, RibbonError::NotAContainer { found: "string", .. }));
}

#[rstest]
fn replace_swaps_the_wrapped_ribbon(tree: Ribbon) {
    let mut wrapper = Wrapper::new(tree.clone());
    let previous = wrapper.replace(Ribbon::new());
    assert_eq!(previous, tree);
    assert!(wrapper.is_empty());
}
