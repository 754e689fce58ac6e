//! Undo history of selection snapshots.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::Selection;

/// A stack of selection snapshots, newest on top.
///
/// Each snapshot is an independent copy of the selection list, so later
/// mutations of the live list never leak into the history. The stack is
/// unbounded unless a limit is given, in which case the oldest snapshot is
/// discarded once the limit is exceeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    snapshots: VecDeque<Selection>,
    limit: Option<NonZeroUsize>,
}

impl History {
    /// Creates an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `limit` snapshots.
    ///
    /// The most recent snapshot is always kept, so the last add or clear
    /// can be undone whatever the limit.
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Pushes a snapshot onto the stack.
    pub fn push(&mut self, snapshot: Selection) {
        self.snapshots.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit.get() {
                self.snapshots.pop_front();
            }
        }
    }

    /// Pops the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<Selection> {
        self.snapshots.pop_back()
    }

    /// Returns the number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the configured limit, if any.
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }
}
