//! Transition timing.
//!
//! A [`Transition`] only knows when it started, how long it lasts and how
//! progress is eased. It reads no clock itself; callers pass the current
//! instant, which keeps every animation deterministic under a
//! [`ManualClock`](segue_core::ManualClock).

use std::time::{Duration, Instant};

use super::easing::{Easing, ease};

/// How a transition presents the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionKind {
    /// Animated properties move from their old to their new values.
    #[default]
    Slide,
    /// New values apply at once; the old presentation fades out over them.
    Fade,
}

/// Timing of one running transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    kind: TransitionKind,
    easing: Easing,
    duration: Duration,
    started_at: Instant,
}

impl Transition {
    /// Create a transition that starts at `started_at`.
    pub fn new(
        kind: TransitionKind,
        easing: Easing,
        duration: Duration,
        started_at: Instant,
    ) -> Self {
        Self {
            kind,
            easing,
            duration,
            started_at,
        }
    }

    #[inline]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// The instant at which the transition completes.
    #[inline]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Linear progress in 0.0..=1.0. Zero-length transitions are complete at once.
    pub fn raw_progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in 0.0..=1.0.
    pub fn progress_at(&self, now: Instant) -> f32 {
        ease(self.easing, self.raw_progress_at(now))
    }

    /// Whether the transition has run its full duration at `now`.
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_over_time() {
        let start = Instant::now();
        let t = Transition::new(
            TransitionKind::Slide,
            Easing::Linear,
            Duration::from_millis(200),
            start,
        );

        assert_eq!(t.progress_at(start), 0.0);
        assert!((t.progress_at(start + Duration::from_millis(50)) - 0.25).abs() < 1e-6);
        assert_eq!(t.progress_at(start + Duration::from_millis(200)), 1.0);
        assert_eq!(t.progress_at(start + Duration::from_secs(3)), 1.0);
    }

    #[test]
    fn test_finished_exactly_at_end() {
        let start = Instant::now();
        let t = Transition::new(
            TransitionKind::Fade,
            Easing::EaseOut,
            Duration::from_millis(300),
            start,
        );

        assert!(!t.is_finished_at(start + Duration::from_millis(299)));
        assert!(t.is_finished_at(start + Duration::from_millis(300)));
        assert_eq!(t.ends_at(), start + Duration::from_millis(300));
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let start = Instant::now();
        let t = Transition::new(TransitionKind::Slide, Easing::EaseOut, Duration::ZERO, start);

        assert_eq!(t.progress_at(start), 1.0);
        assert!(t.is_finished_at(start));
    }

    #[test]
    fn test_time_before_start_clamps_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let t = Transition::new(
            TransitionKind::Slide,
            Easing::Linear,
            Duration::from_millis(100),
            start,
        );

        assert_eq!(t.progress_at(Instant::now()), 0.0);
    }
}
