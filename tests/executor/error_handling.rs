//! Error Handling Tests
//!
//! Argument validation, limits and routing failures, both as typed errors
//! from `execute` and as messages from `invoke`.

use crate::common::*;
use kvstate::{Command, Error, Executor, ExecutorConfig, Response};
use kvstate_core::Limits;
use kvstate_storage::MemoryStore;

#[test]
fn get_without_key_is_invalid_argument() {
    let executor = create_executor();
    let err = executor.execute(Command::Get { args: vec![] }).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidArgument {
            reason: "incorrect number of arguments, key is required".into()
        }
    );
}

#[test]
fn delete_without_key_is_invalid_argument() {
    let executor = create_executor();
    let err = executor.execute(Command::Delete { args: vec![] }).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn put_with_single_argument_is_invalid_argument() {
    let (executor, store) = create_environment();
    let err = executor.execute(Command::Put { args: args(&["k"]) }).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(store.is_empty());
}

#[test]
fn list_without_object_type_is_invalid_argument() {
    let executor = create_executor();
    let err = executor.execute(Command::List { args: vec![] }).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidArgument {
            reason: "incorrect number of arguments, objectType is required".into()
        }
    );
}

#[test]
fn unknown_operation_message() {
    let executor = create_executor();
    let response = executor.invoke("transfer", args(&["a", "b"]));
    assert_eq!(
        response.message(),
        Some("no operation found of name: transfer")
    );
}

#[test]
fn invoke_never_panics_on_bad_input() {
    let executor = create_executor();
    for name in ["", "put", "get", "delete", "list", "PUT", "range\u{0}"] {
        let _ = executor.invoke(name, vec![]);
    }
}

#[test]
fn oversized_value_is_rejected() {
    let config = ExecutorConfig {
        limits: Limits::with_small_limits(),
        ..ExecutorConfig::default()
    };
    let store = MemoryStore::new();
    let executor = Executor::with_config(store.clone(), config);

    let big = "x".repeat(1001);
    let response = executor.invoke("put", args(&["k", &big]));
    assert!(matches!(response, Response::Error { .. }));
    assert!(store.is_empty());
}

#[test]
fn oversized_composite_key_is_rejected() {
    let config = ExecutorConfig {
        limits: Limits::with_small_limits(),
        ..ExecutorConfig::default()
    };
    let executor = Executor::with_config(MemoryStore::new(), config);

    let long_attr = "a".repeat(100);
    let err = executor
        .execute(Command::Get { args: args(&["asset", &long_attr]) })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn config_file_limits_are_applied() {
    let config = ExecutorConfig::from_toml_str("[limits]\nmax_value_bytes = 4\n").unwrap();
    let executor = Executor::with_config(MemoryStore::new(), config);

    assert!(executor.invoke("put", args(&["k", "1234"])).is_success());
    assert!(!executor.invoke("put", args(&["k", "12345"])).is_success());
}
