//! Post-turn task queue.
//!
//! Tasks posted here run after the current event-handling turn has finished,
//! in the order they were posted. A task receives mutable access to the
//! context that owns the queue, so it can read state that settled after the
//! turn (for example a freshly changed selection) and post follow-up tasks.
//!
//! The owner drives processing explicitly with [`TaskQueue::process_all`] or,
//! when the queue lives inside the context itself, by popping and running one
//! task at a time with [`TaskQueue::pop`].

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

/// A unique identifier for a posted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask<C> = Box<dyn FnOnce(&mut C) + Send + 'static>;

struct TaskData<C> {
    id: TaskId,
    task: BoxedTask<C>,
}

/// A FIFO queue of deferred tasks operating on a context `C`.
pub struct TaskQueue<C> {
    tasks: VecDeque<TaskData<C>>,
}

impl<C> TaskQueue<C> {
    /// Create a new, empty task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to run after the current turn.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce(&mut C) + Send + 'static,
    {
        let id = next_task_id();
        tracing::trace!(target: targets::TASK, task_id = id.as_u64(), "posting task");
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        id
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Remove the oldest pending task without running it.
    ///
    /// The returned closure must be run against the context by the caller.
    pub fn pop(&mut self) -> Option<(TaskId, BoxedTask<C>)> {
        self.tasks.pop_front().map(|data| (data.id, data.task))
    }

    /// Run all pending tasks against `ctx` in FIFO order.
    ///
    /// Returns the number of tasks processed.
    pub fn process_all(&mut self, ctx: &mut C) -> usize {
        let mut count = 0;
        while let Some((id, task)) = self.pop() {
            tracing::trace!(target: targets::TASK, task_id = id.as_u64(), "running task");
            task(ctx);
            count += 1;
        }
        count
    }
}

impl<C> Default for TaskQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for TaskQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
