//! Auto-vivification and accessor behaviour through the public API.

use anyhow::{Result, ensure};
use ribbon::{Key, Ribbon, RibbonError, Value};
use rstest::rstest;
use serde_json::json;
use test_helpers::{fixtures::ribbon_from, tree::container_paths};

#[rstest]
#[case(Key::from("plain"))]
#[case(Key::from("with spaces"))]
#[case(Key::from(0))]
#[case(Key::from(-7))]
fn repeated_default_reads_return_the_same_container(#[case] key: Key) {
    let mut ribbon = Ribbon::new();
    let first: *const Value = ribbon.get(key.clone());
    let second: *const Value = ribbon.get(key.clone());
    assert_eq!(first, second);
    assert!(ribbon.contains_key(key));
    assert_eq!(ribbon.len(), 1);
}

#[rstest]
#[case("absent")]
#[case("present")]
fn peek_never_changes_membership(#[case] key: &str) -> Result<()> {
    let ribbon = ribbon_from(json!({"present": {"nested": 1}}))?;
    let before = ribbon.contains_key(key);
    let _ = ribbon.peek(key);
    let _ = ribbon.peek_path([key, "deeper"]);
    ensure!(ribbon.contains_key(key) == before);
    Ok(())
}

#[rstest]
fn one_expression_builds_a_deep_path() -> Result<()> {
    let mut ribbon = Ribbon::new();
    ribbon
        .child("services")?
        .child("registry")?
        .set_and_return_self("port", 5000)
        .set_and_return_self("replicas", 3);
    ensure!(container_paths(&ribbon) == ["services.registry", "services"]);
    ensure!(
        ribbon.to_plain() == json!({"services": {"registry": {"port": 5000, "replicas": 3}}})
    );
    Ok(())
}

#[rstest]
fn descending_through_a_leaf_keeps_the_leaf() -> Result<()> {
    let mut ribbon = ribbon_from(json!({"limit": 10}))?;
    let err = ribbon
        .child("limit")
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected NotAContainer"))?;
    ensure!(matches!(err, RibbonError::NotAContainer { found: "number", .. }));
    ensure!(ribbon.to_plain() == json!({"limit": 10}));
    Ok(())
}

#[rstest]
fn explicit_empty_container_reads_like_an_absent_key() -> Result<()> {
    let mut explicit = Ribbon::new();
    explicit.put("slot", Ribbon::new());
    let mut implicit = Ribbon::new();
    let _ = implicit.get("slot");
    ensure!(explicit == implicit);
    ensure!(explicit.get("slot") == implicit.get("slot"));
    Ok(())
}

#[rstest]
fn map_forwarding_behaves_like_an_ordered_map() {
    let mut ribbon: Ribbon = [("b", 2), ("a", 1)].into_iter().collect();
    ribbon.extend([("c", 3)]);
    let pairs: Vec<(String, i64)> = ribbon
        .iter()
        .filter_map(|(k, v)| v.as_i64().map(|n| (k.to_string(), n)))
        .collect();
    assert_eq!(
        pairs,
        [("b".to_owned(), 2), ("a".to_owned(), 1), ("c".to_owned(), 3)]
    );
    for (_, value) in &mut ribbon {
        *value = Value::from(0);
    }
    assert!(ribbon.values().all(|v| v.as_i64() == Some(0)));
    ribbon.clear();
    assert!(ribbon.is_empty());
}
