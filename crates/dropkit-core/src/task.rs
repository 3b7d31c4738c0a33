//! Deferred one-shot task queue.
//!
//! Widgets sometimes need work to happen *after* the current render pass
//! rather than inside the event handler that decided it. The canonical case
//! is scrolling a freshly focused menu item into view, which only makes
//! sense once the panel has been laid out. Those requests are posted here as
//! fire-and-forget closures, and the host drains the queue once per frame
//! after rendering.
//!
//! State transitions never depend on queue processing: a widget updates its
//! own state synchronously and only the cosmetic follow-up is deferred.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed one-shot task closure.
type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// A FIFO queue of deferred one-shot tasks.
///
/// Tasks are executed in posting order when the owner calls
/// [`process_all`](Self::process_all); until then they can be cancelled by
/// ID. Dropping the queue drops any pending tasks without running them.
#[derive(Default)]
pub struct TaskQueue {
    tasks: VecDeque<TaskData>,
}

impl TaskQueue {
    /// Create a new, empty task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to be executed on the next [`process_all`](Self::process_all).
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Run every pending task in posting order.
    ///
    /// The queue is empty when this returns. Returns the number of tasks
    /// run.
    pub fn process_all(&mut self) -> usize {
        let mut processed = 0;
        while let Some(data) = self.tasks.pop_front() {
            tracing::trace!(
                target: "dropkit_core::task",
                id = data.id.as_u64(),
                "running deferred task"
            );
            (data.task)();
            processed += 1;
        }
        processed
    }

    /// Drop all pending tasks without running them.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check whether the queue has no pending tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
