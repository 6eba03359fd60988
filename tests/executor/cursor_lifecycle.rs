//! Cursor Lifecycle Tests
//!
//! Drives range and list through a host whose cursors follow a script, to
//! check that every cursor the executor opens is closed exactly once, on
//! success and on failure alike.

use std::sync::Mutex;

use crate::common::*;
use kvstate::{Command, Error, Executor};
use kvstate_core::{KeyValue, Result, StateCursor, StateStore};
use kvstate_storage::testing::{CloseCounter, ScriptedCursor, Step};

/// Host store handing out one pre-scripted cursor per query
struct ScriptedHost {
    cursors: Mutex<Vec<ScriptedCursor>>,
    ranges: Mutex<Vec<(String, String)>>,
}

impl ScriptedHost {
    fn new(cursor: ScriptedCursor) -> Self {
        Self {
            cursors: Mutex::new(vec![cursor]),
            ranges: Mutex::new(Vec::new()),
        }
    }

    fn ranges(&self) -> Vec<(String, String)> {
        self.ranges.lock().unwrap().clone()
    }
}

impl StateStore for ScriptedHost {
    fn get_state(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn put_state(&self, _key: &str, _value: &[u8]) -> Result<()> {
        Ok(())
    }

    fn delete_state(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<Box<dyn StateCursor>> {
        self.ranges
            .lock()
            .unwrap()
            .push((start_key.to_string(), end_key.to_string()));
        match self.cursors.lock().unwrap().pop() {
            Some(cursor) => Ok(Box::new(cursor)),
            None => Err(kvstate_core::Error::storage("no cursor scripted")),
        }
    }
}

fn scripted(steps: Vec<Step>) -> (Executor<ScriptedHost>, CloseCounter) {
    let (cursor, closes) = ScriptedCursor::new(steps);
    (Executor::new(ScriptedHost::new(cursor)), closes)
}

#[test]
fn successful_range_closes_cursor_once() {
    let (executor, closes) = scripted(vec![
        Step::Item(KeyValue::new("k1", "{\"x\":1}")),
        Step::Item(KeyValue::new("k2", "plain")),
        Step::Done,
    ]);

    let entries = extract_entries(executor.execute(Command::Range { args: vec![] }).unwrap());
    assert_eq!(entries.len(), 2);
    assert_eq!(closes.count(), 1);
}

#[test]
fn empty_range_closes_cursor_once() {
    let (executor, closes) = scripted(vec![Step::Done]);
    let entries = extract_entries(executor.execute(Command::Range { args: vec![] }).unwrap());
    assert!(entries.is_empty());
    assert_eq!(closes.count(), 1);
}

#[test]
fn range_passes_bounds_to_host() {
    let (executor, _) = scripted(vec![Step::Done]);
    executor.execute(Command::Range { args: args(&["a", "b", "extra"]) }).unwrap();
    assert_eq!(
        executor.store().ranges(),
        vec![("a".to_string(), "b".to_string())]
    );
}

#[test]
fn list_passes_partial_key_range_to_host() {
    let (executor, _) = scripted(vec![Step::Done]);
    executor.execute(Command::List { args: args(&["asset", "org1"]) }).unwrap();

    let (start, end) = kvstate_core::partial_key_range("asset", &["org1"]).unwrap();
    assert_eq!(executor.store().ranges(), vec![(start, end)]);
}

#[test]
fn cursor_failure_is_reported_and_cursor_closed() {
    let (executor, closes) = scripted(vec![
        Step::Item(KeyValue::new("k1", "v")),
        Step::Fail("peer connection lost".into()),
    ]);

    let err = executor.execute(Command::Range { args: vec![] }).unwrap_err();
    assert_eq!(
        err,
        Error::StorageUnavailable {
            reason: "peer connection lost".into()
        }
    );
    assert_eq!(closes.count(), 1);
}

#[test]
fn close_failure_after_drain_is_reported() {
    let (cursor, closes) = ScriptedCursor::new(vec![Step::Last(KeyValue::new("k", "v"))]);
    let executor = Executor::new(ScriptedHost::new(cursor.failing_close()));

    let response = executor.invoke("list", args(&["asset"]));
    assert!(!response.is_success());
    assert!(response.message().unwrap().starts_with("storage unavailable"));
    assert_eq!(closes.count(), 1);
}

#[test]
fn host_failure_opening_cursor_is_reported() {
    let (executor, _) = scripted(vec![Step::Done]);
    executor.execute(Command::Range { args: vec![] }).unwrap();

    let err = executor.execute(Command::Range { args: vec![] }).unwrap_err();
    assert!(matches!(err, Error::StorageUnavailable { .. }));
}

#[test]
fn memory_store_leaves_no_open_cursors() {
    let (executor, store) = create_environment();
    for i in 0..10 {
        executor
            .execute(Command::Put { args: args(&["asset", &i.to_string(), "v"]) })
            .unwrap();
    }
    for _ in 0..5 {
        executor.execute(Command::Range { args: vec![] }).unwrap();
        executor.execute(Command::List { args: args(&["asset"]) }).unwrap();
    }
    assert_eq!(store.open_cursors(), 0);
}
