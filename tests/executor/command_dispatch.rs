//! Command Dispatch Tests
//!
//! Tests that the Executor correctly dispatches all Command variants
//! and returns the appropriate Output types.

use crate::common::*;
use kvstate::{Command, Output};
use kvstate_core::DecodedValue;
use serde_json::json;

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn init_entry_point_returns_empty_payload() {
    let executor = create_executor();
    let response = executor.init(&args(&["ignored"]));
    assert_eq!(response.payload(), Some(&b""[..]));
}

#[test]
fn init_is_not_an_invoke_operation() {
    let executor = create_executor();
    let response = executor.invoke("init", vec![]);
    assert_eq!(
        response.message(),
        Some("no operation found of name: init")
    );
}

// ============================================================================
// State Commands
// ============================================================================

#[test]
fn put_returns_unit() {
    let executor = create_executor();
    let output = executor.execute(Command::Put { args: args(&["k", "v"]) }).unwrap();
    assert_eq!(output, Output::Unit);
}

#[test]
fn get_returns_stored_bytes() {
    let executor = create_executor();
    executor.execute(Command::Put { args: args(&["k", "v"]) }).unwrap();

    let output = executor.execute(Command::Get { args: args(&["k"]) }).unwrap();
    assert_eq!(output, Output::Bytes(b"v".to_vec()));
}

#[test]
fn get_missing_key_returns_empty_bytes() {
    let executor = create_executor();
    let output = executor.execute(Command::Get { args: args(&["absent"]) }).unwrap();
    assert_eq!(output, Output::Bytes(vec![]));
}

#[test]
fn put_overwrites_existing_value() {
    let executor = create_executor();
    executor.execute(Command::Put { args: args(&["k", "first"]) }).unwrap();
    executor.execute(Command::Put { args: args(&["k", "second"]) }).unwrap();

    let output = executor.execute(Command::Get { args: args(&["k"]) }).unwrap();
    assert_eq!(output, Output::Bytes(b"second".to_vec()));
}

#[test]
fn delete_removes_key() {
    let (executor, store) = create_environment();
    executor.execute(Command::Put { args: args(&["k", "v"]) }).unwrap();

    let output = executor.execute(Command::Delete { args: args(&["k"]) }).unwrap();
    assert_eq!(output, Output::Unit);
    assert!(store.is_empty());
}

#[test]
fn delete_missing_key_succeeds() {
    let executor = create_executor();
    assert!(executor.execute(Command::Delete { args: args(&["absent"]) }).is_ok());
}

// ============================================================================
// Query Commands
// ============================================================================

#[test]
fn range_without_arguments_scans_full_keyspace() {
    let (executor, store) = create_environment();
    for key in ["c", "a", "b"] {
        executor.execute(Command::Put { args: args(&[key, "1"]) }).unwrap();
    }
    executor.execute(Command::Put { args: args(&["asset", "7", "x"]) }).unwrap();

    let keys = extract_keys(executor.execute(Command::Range { args: vec![] }).unwrap());
    assert_eq!(keys.len(), 4);
    assert!(keys[0].starts_with('\u{0}'), "composite keys sort first");
    assert_eq!(&keys[1..], ["a", "b", "c"]);
    assert_eq!(store.open_cursors(), 0);
}

#[test]
fn range_is_half_open() {
    let (executor, store) = create_environment();
    for key in ["a", "aa", "b", "ba", "c"] {
        executor.execute(Command::Put { args: args(&[key, "1"]) }).unwrap();
    }

    let keys = extract_keys(executor.execute(Command::Range { args: args(&["a", "b"]) }).unwrap());
    assert_eq!(keys, vec!["a", "aa"]);
    assert_eq!(store.open_cursors(), 0);
}

#[test]
fn range_with_start_only_is_open_ended() {
    let executor = create_executor();
    for key in ["a", "b", "c"] {
        executor.execute(Command::Put { args: args(&[key, "1"]) }).unwrap();
    }

    let keys = extract_keys(executor.execute(Command::Range { args: args(&["b"]) }).unwrap());
    assert_eq!(keys, vec!["b", "c"]);
}

#[test]
fn range_decodes_json_and_text_values() {
    let executor = create_executor();
    executor.execute(Command::Put { args: args(&["k1", "{\"x\":1}"]) }).unwrap();
    executor.execute(Command::Put { args: args(&["k2", "plain"]) }).unwrap();

    let entries = extract_entries(executor.execute(Command::Range { args: vec![] }).unwrap());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, DecodedValue::Json(json!({"x": 1})));
    assert_eq!(entries[1].value, DecodedValue::Raw("plain".into()));
}

#[test]
fn list_returns_only_matching_prefix() {
    let (executor, store) = create_environment();
    executor.execute(Command::Put { args: args(&["asset", "org1", "1", "a"]) }).unwrap();
    executor.execute(Command::Put { args: args(&["asset", "org1", "2", "b"]) }).unwrap();
    executor.execute(Command::Put { args: args(&["asset", "org10", "1", "c"]) }).unwrap();
    executor.execute(Command::Put { args: args(&["owner", "org1", "d"]) }).unwrap();
    executor.execute(Command::Put { args: args(&["asset", "plain"]) }).unwrap();

    let entries = extract_entries(
        executor.execute(Command::List { args: args(&["asset", "org1"]) }).unwrap(),
    );
    let values: Vec<_> = entries.into_iter().map(|e| e.value).collect();
    assert_eq!(
        values,
        vec![DecodedValue::Raw("a".into()), DecodedValue::Raw("b".into())]
    );

    let all_assets = extract_entries(
        executor.execute(Command::List { args: args(&["asset"]) }).unwrap(),
    );
    assert_eq!(all_assets.len(), 3);
    assert_eq!(store.open_cursors(), 0);
}

#[test]
fn list_of_unknown_object_type_is_empty() {
    let executor = create_executor();
    executor.execute(Command::Put { args: args(&["asset", "1", "a"]) }).unwrap();

    let entries = extract_entries(executor.execute(Command::List { args: args(&["owner"]) }).unwrap());
    assert!(entries.is_empty());
}

// ============================================================================
// Invoke
// ============================================================================

#[test]
fn invoke_dispatches_every_operation() {
    let executor = create_executor();
    let calls: [(&str, &[&str]); 5] = [
        ("put", &["asset", "1", "v"]),
        ("get", &["asset", "1"]),
        ("range", &[]),
        ("list", &["asset"]),
        ("delete", &["asset", "1"]),
    ];
    for (name, call_args) in calls {
        let response = executor.invoke(name, args(call_args));
        assert!(response.is_success(), "{} failed: {:?}", name, response);
    }
}

#[test]
fn invoke_list_payload_is_json_array() {
    let executor = create_executor();
    executor.invoke("put", args(&["asset", "42", "{\"color\":\"blue\"}"]));

    let response = executor.invoke("list", args(&["asset"]));
    let payload: serde_json::Value = serde_json::from_slice(response.payload().unwrap()).unwrap();
    let expected_key = kvstate_core::encode_composite_key("asset", &["42"]).unwrap();
    assert_eq!(
        payload,
        json!([{"key": expected_key, "value": {"color": "blue"}}])
    );
}
