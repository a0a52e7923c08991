//! Timer system for the Segue main loop.
//!
//! Provides one-shot and repeating timers. Timers never run code themselves:
//! an expired timer produces a [`LoopEvent::Timer`] carrying its id, and the
//! owner of that id decides what to do. A timer whose owner went away is
//! simply stopped and its id never reaches anyone.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::{LoopError, Result};
use crate::event::LoopEvent;
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

#[derive(Debug)]
struct TimerData {
    next_fire: Instant,
    interval: Duration,
    kind: TimerKind,
}

/// Heap entry, ordered so the earliest deadline pops first.
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap.
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers of a main loop.
///
/// All methods take the current instant explicitly; the owning
/// [`MainLoop`](crate::MainLoop) supplies it from its clock.
#[derive(Debug, Default)]
pub struct TimerManager {
    timers: SlotMap<TimerId, TimerData>,
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create an empty timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        self.insert(now + duration, duration, TimerKind::OneShot)
    }

    /// Start a repeating timer. The first fire is `interval` after `now`.
    pub fn start_repeating(&mut self, now: Instant, interval: Duration) -> TimerId {
        self.insert(now + interval, interval, TimerKind::Repeating)
    }

    fn insert(&mut self, next_fire: Instant, interval: Duration, kind: TimerKind) -> TimerId {
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        id
    }

    /// Stop and remove a timer.
    ///
    /// Stale heap entries are discarded lazily when they reach the front.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        self.timers
            .remove(id)
            .map(|_| ())
            .ok_or(LoopError::InvalidTimerId)
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Duration from `now` until the next timer fires, if any.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.discard_stale();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            match self.timers.get(entry.id) {
                Some(timer) if timer.next_fire == entry.fire_time => break,
                _ => {
                    self.queue.pop();
                }
            }
        }
    }

    /// Collect every timer whose deadline is at or before `now`.
    #[tracing::instrument(skip(self), target = "segue_core::timer", level = "trace")]
    pub fn process_expired(&mut self, now: Instant) -> Vec<LoopEvent> {
        let mut events = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            let Some(timer) = self.timers.get_mut(entry.id) else {
                continue;
            };
            if timer.next_fire != entry.fire_time {
                continue;
            }

            tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
            events.push(LoopEvent::Timer { id: entry.id });

            match timer.kind {
                TimerKind::OneShot => {
                    self.timers.remove(entry.id);
                }
                TimerKind::Repeating => {
                    // Re-arm from the scheduled time so intervals do not drift.
                    timer.next_fire = entry.fire_time + timer.interval;
                    if timer.next_fire <= now {
                        timer.next_fire = now + timer.interval;
                    }
                    self.queue.push(TimerQueueEntry {
                        id: entry.id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        events
    }

    /// Number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(events: &[LoopEvent]) -> Vec<TimerId> {
        events
            .iter()
            .filter_map(|e| match e {
                LoopEvent::Timer { id } => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_shot_fires_once() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, Duration::from_millis(100));

        assert!(timers.process_expired(start + Duration::from_millis(99)).is_empty());
        let events = timers.process_expired(start + Duration::from_millis(100));
        assert_eq!(fired(&events), vec![id]);
        assert!(!timers.is_active(id));
        assert!(timers.process_expired(start + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_repeating_rearms() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_repeating(start, Duration::from_millis(10));

        assert_eq!(fired(&timers.process_expired(start + Duration::from_millis(10))), vec![id]);
        assert_eq!(fired(&timers.process_expired(start + Duration::from_millis(20))), vec![id]);
        assert!(timers.is_active(id));
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, Duration::from_millis(50));

        assert!(timers.stop(id).is_ok());
        assert_eq!(timers.stop(id), Err(LoopError::InvalidTimerId));
        assert!(timers.process_expired(start + Duration::from_secs(1)).is_empty());
        assert_eq!(timers.time_until_next(start), None);
    }

    #[test]
    fn test_expired_in_deadline_order() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let late = timers.start_one_shot(start, Duration::from_millis(30));
        let early = timers.start_one_shot(start, Duration::from_millis(10));

        assert_eq!(
            timers.time_until_next(start),
            Some(Duration::from_millis(10))
        );
        let events = timers.process_expired(start + Duration::from_millis(40));
        assert_eq!(fired(&events), vec![early, late]);
    }
}
