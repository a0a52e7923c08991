//! Spinning activity indicator.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use segue_render::Size;

/// An indeterminate spinner shown while the button is loading.
///
/// The indicator has a fixed intrinsic size. While animating, its rotation
/// advances one full turn per [`period`](ActivityIndicator::period).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityIndicator {
    size: Size,
    period: Duration,
    started_at: Option<Instant>,
}

impl ActivityIndicator {
    /// Default edge length of the indicator.
    pub const DEFAULT_EXTENT: f32 = 20.0;

    pub fn new() -> Self {
        Self {
            size: Size::new(Self::DEFAULT_EXTENT, Self::DEFAULT_EXTENT),
            period: Duration::from_secs(1),
            started_at: None,
        }
    }

    /// Builder-style size override.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start spinning. Already spinning indicators keep their phase.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    /// Rotation in radians at `now`; zero when stopped.
    pub fn rotation_at(&self, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.period.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        let turns = elapsed / self.period.as_secs_f32();
        turns.fract() * TAU
    }
}

impl Default for ActivityIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_indicator_does_not_rotate() {
        let indicator = ActivityIndicator::new();
        assert!(!indicator.is_animating());
        assert_eq!(indicator.rotation_at(Instant::now()), 0.0);
        assert_eq!(indicator.size(), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_rotation_advances_while_animating() {
        let start = Instant::now();
        let mut indicator = ActivityIndicator::new();
        indicator.start(start);

        let quarter = indicator.rotation_at(start + Duration::from_millis(250));
        assert!((quarter - TAU / 4.0).abs() < 1e-3);

        // Restarting keeps the phase.
        indicator.start(start + Duration::from_millis(100));
        let again = indicator.rotation_at(start + Duration::from_millis(250));
        assert!((again - quarter).abs() < 1e-6);

        indicator.stop();
        assert_eq!(indicator.rotation_at(start + Duration::from_millis(250)), 0.0);
    }
}
