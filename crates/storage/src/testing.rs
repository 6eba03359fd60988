//! Testing utilities for cursor consumers
//!
//! [`ScriptedCursor`] plays back a fixed sequence of cursor steps, including
//! host failures, and counts how often it is closed. It is used to check that
//! consumers drain in order and release the cursor exactly once on every
//! path.
//!
//! # Example
//!
//! ```
//! use kvstate_core::{KeyValue, StateCursor};
//! use kvstate_storage::testing::{ScriptedCursor, Step};
//!
//! let (mut cursor, closes) = ScriptedCursor::new(vec![
//!     Step::Item(KeyValue::new("k1", "v1")),
//!     Step::Done,
//! ]);
//! assert!(!cursor.next().unwrap().done);
//! assert!(cursor.next().unwrap().done);
//! cursor.close().unwrap();
//! assert_eq!(closes.count(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kvstate_core::{CursorItem, Error, KeyValue, Result, StateCursor};

/// One scripted cursor step
#[derive(Debug, Clone)]
pub enum Step {
    /// Yield a pair, more to come
    Item(KeyValue),
    /// Yield a pair and signal completion in the same step
    Last(KeyValue),
    /// Signal completion without a pair
    Done,
    /// Fail with a storage error
    Fail(String),
}

/// Shared view of how many times a scripted cursor was closed
#[derive(Debug, Clone, Default)]
pub struct CloseCounter(Arc<AtomicUsize>);

impl CloseCounter {
    /// Number of `close` calls so far
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Cursor replaying a scripted list of steps
#[derive(Debug)]
pub struct ScriptedCursor {
    steps: VecDeque<Step>,
    closes: CloseCounter,
    fail_close: bool,
}

impl ScriptedCursor {
    /// Create a cursor over `steps`; running past the script yields `Done`
    pub fn new(steps: Vec<Step>) -> (Self, CloseCounter) {
        let closes = CloseCounter::default();
        let cursor = Self {
            steps: steps.into(),
            closes: closes.clone(),
            fail_close: false,
        };
        (cursor, closes)
    }

    /// Make `close` count the call and then fail
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl StateCursor for ScriptedCursor {
    fn next(&mut self) -> Result<CursorItem> {
        match self.steps.pop_front().unwrap_or(Step::Done) {
            Step::Item(kv) => Ok(CursorItem::item(kv)),
            Step::Last(kv) => Ok(CursorItem::last(kv)),
            Step::Done => Ok(CursorItem::done()),
            Step::Fail(reason) => Err(Error::Storage(reason)),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.closes.0.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(Error::storage("scripted close failure"));
        }
        Ok(())
    }
}
