//! Deferred actions.
//!
//! Resolution delays are modeled as actions scheduled on a virtual clock
//! rather than real timers. Tasks run in due-time order; ties run in the
//! order they were scheduled (`TaskId` is monotonically increasing).
//!
//! Each task remembers the play session that scheduled it. The controller
//! drops tasks whose session has ended.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Unique identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// The effect a task applies when it comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Mark both cards matched and return to idle.
    ResolveMatch { first: CardId, second: CardId },
    /// Turn the pending pair face-down and return to idle.
    ResolveMismatch,
    /// Switch to the victory screen.
    AnnounceVictory,
}

/// A task waiting on the clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    /// Play session the task belongs to.
    pub session: u64,
    /// Clock reading at which the task runs.
    pub due: Duration,
    pub action: Deferred,
}

impl ScheduledTask {
    fn key(&self) -> (Duration, TaskId) {
        (self.due, self.id)
    }
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Queue of deferred actions, earliest first.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    heap: BinaryHeap<Reverse<ScheduledTask>>,
    next_id: u64,
}

impl DeferredQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run at `due`.
    pub fn schedule(&mut self, session: u64, due: Duration, action: Deferred) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.heap.push(Reverse(ScheduledTask {
            id,
            session,
            due,
            action,
        }));
        id
    }

    /// Remove and return the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledTask> {
        if self.heap.peek()?.0.due <= now {
            self.heap.pop().map(|Reverse(task)| task)
        } else {
            None
        }
    }

    /// Due time of the earliest task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(task)| task.due)
    }

    /// Drop every task not belonging to `session`. Returns how many were dropped.
    pub fn retain_session(&mut self, session: u64) -> usize {
        let before = self.heap.len();
        self.heap.retain(|Reverse(task)| task.session == session);
        before - self.heap.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
