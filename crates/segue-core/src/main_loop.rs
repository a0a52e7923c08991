//! The cooperative, single-threaded main loop.
//!
//! [`MainLoop`] bundles a [`Clock`], a [`TimerManager`] and a [`TaskQueue`]
//! behind one shared handle. UI components keep an `Arc<MainLoop>` to read
//! the current time and to schedule timers they own; the host drives the
//! loop either by calling [`MainLoop::process_pending`] from its own event
//! loop or by handing control to [`MainLoop::run_until`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use segue_core::{LoopEvent, MainLoop, ManualClock};
//!
//! let clock = ManualClock::new();
//! let main_loop = MainLoop::with_clock(Arc::new(clock.clone()));
//!
//! let id = main_loop.start_timer(Duration::from_secs(1));
//! assert!(main_loop.process_pending().is_empty());
//!
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(main_loop.process_pending(), vec![LoopEvent::Timer { id }]);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::error::{LoopError, Result};
use crate::event::LoopEvent;
use crate::logging::targets;
use crate::task::{TaskId, TaskQueue};
use crate::timer::{TimerId, TimerManager};

/// Shared main loop state.
pub struct MainLoop {
    clock: Arc<dyn Clock>,
    timers: Mutex<TimerManager>,
    tasks: Mutex<TaskQueue>,
    quit_requested: AtomicBool,
}

impl MainLoop {
    /// Create a main loop driven by real time.
    pub fn new() -> Arc<Self> {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a main loop driven by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self {
            clock,
            timers: Mutex::new(TimerManager::new()),
            tasks: Mutex::new(TaskQueue::new()),
            quit_requested: AtomicBool::new(false),
        })
    }

    /// The current instant according to the loop's clock.
    #[inline]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Start a one-shot timer.
    pub fn start_timer(&self, duration: Duration) -> TimerId {
        let now = self.now();
        self.timers.lock().start_one_shot(now, duration)
    }

    /// Start a repeating timer.
    pub fn start_repeating_timer(&self, interval: Duration) -> TimerId {
        let now = self.now();
        self.timers.lock().start_repeating(now, interval)
    }

    /// Stop a timer.
    ///
    /// # Errors
    ///
    /// [`LoopError::InvalidTimerId`] if the timer already fired or was stopped.
    pub fn stop_timer(&self, id: TimerId) -> Result<()> {
        self.timers.lock().stop(id)
    }

    /// Check whether a timer is still pending.
    pub fn is_timer_active(&self, id: TimerId) -> bool {
        self.timers.lock().is_active(id)
    }

    /// Number of pending timers.
    pub fn active_timer_count(&self) -> usize {
        self.timers.lock().active_count()
    }

    /// Duration until the next timer fires, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.now();
        self.timers.lock().time_until_next(now)
    }

    // =========================================================================
    // Deferred tasks
    // =========================================================================

    /// Post a task to run on the next [`process_pending`](Self::process_pending).
    pub fn post_task<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.tasks.lock().post(task)
    }

    /// Cancel a pending task.
    ///
    /// # Errors
    ///
    /// [`LoopError::InvalidTaskId`] if the task already ran or was cancelled.
    pub fn cancel_task(&self, id: TaskId) -> Result<()> {
        if self.tasks.lock().cancel(id) {
            Ok(())
        } else {
            Err(LoopError::InvalidTaskId)
        }
    }

    /// Number of tasks waiting to run.
    pub fn pending_task_count(&self) -> usize {
        self.tasks.lock().pending_count()
    }

    // =========================================================================
    // Processing
    // =========================================================================

    /// Run one batch of deferred tasks and collect expired timers.
    ///
    /// Tasks run with no loop lock held, so they may post further tasks or
    /// start timers; those are picked up by the next call.
    #[tracing::instrument(skip(self), target = "segue_core::main_loop", level = "trace")]
    pub fn process_pending(&self) -> Vec<LoopEvent> {
        let batch = self.tasks.lock().take_batch();
        if !batch.is_empty() {
            tracing::trace!(target: targets::TASK, count = batch.len(), "running deferred tasks");
        }
        for task in batch {
            task();
        }

        let now = self.now();
        let mut events = self.timers.lock().process_expired(now);
        if self.quit_requested.swap(false, Ordering::SeqCst) {
            events.push(LoopEvent::Quit);
        }
        events
    }

    /// Ask a running [`run_until`](Self::run_until) to return.
    pub fn quit(&self) {
        self.quit_requested.store(true, Ordering::SeqCst);
    }

    /// Drive the loop until `deadline` or until [`quit`](Self::quit) is called.
    ///
    /// Every iteration delivers the expired timer events to `handler`,
    /// followed by a single [`LoopEvent::Frame`]. Between iterations the
    /// thread sleeps for at most `frame_interval`, less if a timer is due
    /// sooner. The clock must advance on its own; with a
    /// [`ManualClock`](crate::ManualClock) use `process_pending` instead.
    pub fn run_until<F>(&self, deadline: Instant, frame_interval: Duration, mut handler: F)
    where
        F: FnMut(&LoopEvent),
    {
        tracing::debug!(target: targets::MAIN_LOOP, "main loop started");
        loop {
            for event in self.process_pending() {
                handler(&event);
                if event == LoopEvent::Quit {
                    tracing::debug!(target: targets::MAIN_LOOP, "main loop quit");
                    return;
                }
            }
            handler(&LoopEvent::Frame);

            let now = self.now();
            if now >= deadline {
                break;
            }

            let mut wait = frame_interval.min(deadline - now);
            if let Some(next) = self.time_until_next() {
                wait = wait.min(next);
            }
            if self.pending_task_count() == 0 && !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }
        tracing::debug!(target: targets::MAIN_LOOP, "main loop reached deadline");
    }
}

static_assertions::assert_impl_all!(MainLoop: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::clock::ManualClock;

    fn manual_loop() -> (ManualClock, Arc<MainLoop>) {
        let clock = ManualClock::new();
        let main_loop = MainLoop::with_clock(Arc::new(clock.clone()));
        (clock, main_loop)
    }

    #[test]
    fn test_tasks_run_in_order() {
        let (_clock, main_loop) = manual_loop();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let log = log.clone();
            main_loop.post_task(move || log.lock().push(i));
        }
        main_loop.process_pending();

        assert_eq!(*log.lock(), vec![0, 1, 2]);
        assert_eq!(main_loop.pending_task_count(), 0);
    }

    #[test]
    fn test_task_posting_from_task_runs_next_pass() {
        let (_clock, main_loop) = manual_loop();
        let count = Arc::new(AtomicUsize::new(0));

        let inner_loop = main_loop.clone();
        let inner_count = count.clone();
        main_loop.post_task(move || {
            let c = inner_count.clone();
            inner_loop.post_task(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        });

        main_loop.process_pending();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        main_loop.process_pending();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_task_twice_errors() {
        let (_clock, main_loop) = manual_loop();
        let id = main_loop.post_task(|| {});

        assert!(main_loop.cancel_task(id).is_ok());
        assert_eq!(main_loop.cancel_task(id), Err(LoopError::InvalidTaskId));
    }

    #[test]
    fn test_timer_follows_clock() {
        let (clock, main_loop) = manual_loop();
        let id = main_loop.start_timer(Duration::from_millis(500));

        clock.advance_ms(499);
        assert!(main_loop.process_pending().is_empty());
        assert_eq!(main_loop.time_until_next(), Some(Duration::from_millis(1)));

        clock.advance_ms(1);
        assert_eq!(main_loop.process_pending(), vec![LoopEvent::Timer { id }]);
        assert!(!main_loop.is_timer_active(id));
    }

    #[test]
    fn test_quit_is_reported_once() {
        let (_clock, main_loop) = manual_loop();
        main_loop.quit();

        assert_eq!(main_loop.process_pending(), vec![LoopEvent::Quit]);
        assert!(main_loop.process_pending().is_empty());
    }
}
