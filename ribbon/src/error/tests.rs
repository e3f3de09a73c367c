//! Unit tests for error construction and rendering.

use rstest::rstest;

use super::RibbonError;
use crate::{Format, Key, Value};

#[rstest]
#[case(Value::from(1), "number")]
#[case(Value::from("text"), "string")]
#[case(Value::from(vec![1, 2]), "array")]
#[case(Value::from(None::<bool>), "null")]
fn not_a_container_records_leaf_kind(#[case] leaf: Value, #[case] expected: &str) {
    let err = RibbonError::not_a_container("node", &leaf);
    match err {
        RibbonError::NotAContainer { key, found } => {
            assert_eq!(key, Key::from("node"));
            assert_eq!(found, expected);
        }
        other => panic!("expected NotAContainer, got {other:?}"),
    }
}

#[rstest]
fn messages_name_the_offending_key() {
    let err = RibbonError::not_a_container(3, &Value::from(true));
    assert_eq!(
        err.to_string(),
        "cannot descend through '3': it holds a boolean, not a container"
    );
}

#[rstest]
fn parse_errors_keep_their_source() {
    let source = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
    let err = RibbonError::Parse {
        format: Format::Json,
        source: Box::new(source),
    };
    assert!(err.to_string().starts_with("failed to parse JSON input"));
    assert!(std::error::Error::source(&err).is_some());
}
