//! Value interpolation.

use std::time::{Duration, Instant};

use segue_render::{Color, Point, Size};

use super::easing::Easing;
use super::transition::{Transition, TransitionKind};

/// Types that can be blended between two values.
pub trait Interpolate: Copy {
    /// The value `t` of the way from `self` to `other` (0.0 = self, 1.0 = other).
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Point {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        Point::new(self.x.interpolate(other.x, t), self.y.interpolate(other.y, t))
    }
}

impl Interpolate for Size {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        Size::new(
            self.width.interpolate(other.width, t),
            self.height.interpolate(other.height, t),
        )
    }
}

impl Interpolate for Color {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// A start and end value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// The value at eased `progress`.
    #[inline]
    pub fn value_at(&self, progress: f32) -> T {
        self.from.interpolate(self.to, progress)
    }
}

/// A single value animated over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAnimation<T> {
    tween: Tween<T>,
    transition: Transition,
}

impl<T: Interpolate> PropertyAnimation<T> {
    /// Animate from `from` to `to`, starting at `started_at`.
    pub fn new(from: T, to: T, easing: Easing, duration: Duration, started_at: Instant) -> Self {
        Self {
            tween: Tween::new(from, to),
            transition: Transition::new(TransitionKind::Slide, easing, duration, started_at),
        }
    }

    /// The animated value at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        self.tween.value_at(self.transition.progress_at(now))
    }

    /// The value the animation ends on.
    #[inline]
    pub fn target(&self) -> T {
        self.tween.to
    }

    #[inline]
    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.transition.is_finished_at(now)
    }
}

/// Uniform scale animation, used for the press effect.
pub type ScaleAnimation = PropertyAnimation<f32>;
