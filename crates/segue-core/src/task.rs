//! Deferred task queue.
//!
//! Tasks posted to the main loop run, in posting order, the next time the
//! loop processes pending work.

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

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

pub(crate) type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// FIFO of deferred tasks.
pub struct TaskQueue {
    tasks: VecDeque<TaskData>,
    batch_size: usize,
}

impl TaskQueue {
    /// Create a new task queue.
    pub fn new() -> Self {
        Self::with_batch_size(32)
    }

    /// Create a new task queue that hands out at most `batch_size` tasks per pass.
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            tasks: VecDeque::new(),
            batch_size: batch_size.max(1),
        }
    }

    /// Append a task.
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

    /// Remove a pending task.
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

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Detach up to one batch of tasks so the caller can run them without
    /// holding any lock on the queue.
    pub(crate) fn take_batch(&mut self) -> Vec<BoxedTask> {
        let count = self.tasks.len().min(self.batch_size);
        self.tasks.drain(..count).map(|t| t.task).collect()
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_removes_task() {
        let mut queue = TaskQueue::new();
        let first = queue.post(|| {});
        let _second = queue.post(|| {});

        assert!(queue.cancel(first));
        assert!(!queue.cancel(first));
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn test_batches_are_bounded() {
        let mut queue = TaskQueue::with_batch_size(2);
        for _ in 0..5 {
            queue.post(|| {});
        }

        assert_eq!(queue.take_batch().len(), 2);
        assert_eq!(queue.take_batch().len(), 2);
        assert_eq!(queue.take_batch().len(), 1);
        assert!(!queue.has_pending());
    }
}
