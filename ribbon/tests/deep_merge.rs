//! Deep-merge behaviour through the public API.

use anyhow::{Result, ensure};
use ribbon::{Key, Ribbon, RibbonError, Value, deep_merge, deep_merge_with, merge_all};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::{
    fixtures::{deep_tree, ribbon_from, service_defaults, service_overrides},
    tree::key_paths,
};

#[fixture]
fn defaults() -> Ribbon {
    ribbon_from(service_defaults()).expect("defaults fixture")
}

#[fixture]
fn overrides() -> Ribbon {
    ribbon_from(service_overrides()).expect("overrides fixture")
}

#[rstest]
fn layered_service_configuration(defaults: Ribbon, overrides: Ribbon) -> Result<()> {
    let merged = deep_merge(&defaults, &overrides);
    ensure!(
        merged.to_plain()
            == json!({
                "name": "registry",
                "server": {
                    "host": "127.0.0.1",
                    "port": 9090,
                    "tls": {"enabled": true, "cert": "/etc/registry/cert.pem"},
                },
                "log": {"level": "info", "targets": ["stdout", "file"]},
                "features": {"search": true},
            })
    );
    let order: Vec<String> = merged.keys().map(ToString::to_string).collect();
    ensure!(order == ["name", "server", "log", "features"]);
    ensure!(
        key_paths(&merged)
            == [
                "name",
                "server",
                "server.host",
                "server.port",
                "server.tls",
                "server.tls.enabled",
                "server.tls.cert",
                "log",
                "log.level",
                "log.targets",
                "features",
                "features.search",
            ]
    );
    Ok(())
}

#[rstest]
fn incoming_wins_every_shared_leaf(defaults: Ribbon, overrides: Ribbon) {
    let merged = deep_merge(&defaults, &overrides);
    for path in [
        vec!["server", "port"],
        vec!["server", "tls", "enabled"],
        vec!["log", "targets"],
    ] {
        let incoming = overrides.peek_path(path.clone()).expect("present in overrides");
        assert!(incoming.is_leaf(), "{path:?}");
        assert_eq!(merged.peek_path(path.clone()), Some(incoming), "{path:?}");
    }
}

#[rstest]
#[case(0, 1)]
#[case(2, 2)]
#[case(3, 3)]
fn merging_with_empty_is_identity(#[case] depth: usize, #[case] width: usize) -> Result<()> {
    let tree = deep_tree(depth, width)?;
    for merged in [deep_merge(&tree, &Ribbon::new()), deep_merge(&Ribbon::new(), &tree)] {
        ensure!(merged == tree);
        ensure!(key_paths(&merged) == key_paths(&tree));
    }
    Ok(())
}

#[rstest]
fn self_merge_is_idempotent() -> Result<()> {
    let tree = deep_tree(3, 2)?;
    let merged = deep_merge(&tree, &tree);
    ensure!(merged == tree);
    ensure!(key_paths(&merged) == key_paths(&tree));
    Ok(())
}

#[rstest]
fn resolver_receives_key_and_both_values() -> Result<()> {
    let base = ribbon_from(json!({"a": 1}))?;
    let incoming = ribbon_from(json!({"a": 2}))?;
    let mut seen = Vec::new();
    let merged = deep_merge_with(&base, &incoming, |key, old, new| {
        seen.push((key.clone(), old.as_i64(), new.as_i64()));
        Value::from(old.as_i64().unwrap_or(0) + new.as_i64().unwrap_or(0))
    });
    ensure!(merged.to_plain() == json!({"a": 3}));
    ensure!(seen == [(Key::from("a"), Some(1), Some(2))]);
    Ok(())
}

#[rstest]
fn stateful_resolvers_carry_state_across_merges() -> Result<()> {
    let a = ribbon_from(json!({"k": 1}))?;
    let b = ribbon_from(json!({"k": 2}))?;
    let c = ribbon_from(json!({"k": 3}))?;
    let mut calls = 0_i64;
    let mut weighted = |_: &Key, old: &Value, new: &Value| {
        calls += 1;
        Value::from(old.as_i64().unwrap_or(0) * calls + new.as_i64().unwrap_or(0))
    };
    let left = deep_merge_with(&deep_merge_with(&a, &b, &mut weighted), &c, &mut weighted);
    ensure!(left.peek("k").and_then(Value::as_i64) == Some(9));
    Ok(())
}

#[rstest]
fn merge_results_are_independent_of_inputs(defaults: Ribbon, overrides: Ribbon) -> Result<()> {
    let mut merged = deep_merge(&defaults, &overrides);
    merged.child("features")?.put("search", false);
    merged.child("server")?.child("tls")?.put("enabled", false);
    ensure!(overrides.peek_path(["features", "search"]) == Some(&Value::from(true)));
    ensure!(overrides.peek_path(["server", "tls", "enabled"]) == Some(&Value::from(true)));
    ensure!(defaults.peek("features").is_none());
    Ok(())
}

#[rstest]
fn fallible_resolver_errors_propagate() -> Result<()> {
    let mut base = ribbon_from(json!({"port": 80}))?;
    let incoming = ribbon_from(json!({"port": "eighty"}))?;
    let outcome = ribbon::try_deep_merge_in_place_with(&mut base, &incoming, |key, old, new| {
        if old.kind() == new.kind() {
            Ok(new.clone())
        } else {
            Err(RibbonError::conflict(key, format!("{} cannot replace {}", new.kind(), old.kind())))
        }
    });
    let err = outcome
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected a conflict"))?;
    ensure!(err.to_string() == "merge conflict at 'port': string cannot replace number");
    ensure!(base.to_plain() == json!({"port": 80}));
    Ok(())
}

#[rstest]
fn layers_fold_in_order(defaults: Ribbon, overrides: Ribbon) -> Result<()> {
    let cli = ribbon_from(json!({"server": {"port": 1234}}))?;
    let merged = merge_all([defaults, overrides, cli]);
    ensure!(merged.peek_path(["server", "port"]).and_then(Value::as_i64) == Some(1234));
    ensure!(merged.peek_path(["server", "tls", "enabled"]) == Some(&Value::from(true)));
    Ok(())
}
