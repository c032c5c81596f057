//! Scheduler - virtual-time task queue
//!
//! Replaces free-running timers: every task has a deadline on a virtual
//! clock that only moves when the owner calls [`Scheduler::pop_due`], so a
//! cancelled task can never fire and tests can step time exactly.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle for cancelling a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

pub struct Scheduler<T> {
    /// Current virtual time
    now: Duration,
    /// Monotonic id source; doubles as the tie-breaker for equal deadlines
    next_id: u64,
    queue: BTreeMap<(Duration, TaskId), T>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` after the current virtual time
    pub fn schedule_in(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.insert((self.now + delay, id), task);
        id
    }

    /// Remove a task before it fires. Returns it if it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        let key = self.queue.keys().find(|(_, task_id)| *task_id == id).copied()?;
        self.queue.remove(&key)
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Deadline of the earliest pending task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest task due at or before `now`.
    ///
    /// Virtual time jumps to the popped task's deadline, so anything the
    /// caller schedules in response is measured from when the task was due,
    /// not from when it was noticed. With nothing due, time moves to `now`.
    /// Time never moves backwards.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        match self.queue.first_key_value() {
            Some((&(deadline, _), _)) if deadline <= now => {
                let ((deadline, _), task) = self.queue.pop_first()?;
                self.now = self.now.max(deadline);
                Some(task)
            }
            _ => {
                self.now = self.now.max(now);
                None
            }
        }
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
