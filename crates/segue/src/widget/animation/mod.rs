//! Animation support for Segue widgets.
//!
//! - [`Easing`] curves and the [`ease`] helper
//! - [`Transition`] timing, fed the current instant by the caller
//! - [`Interpolate`], [`Tween`] and [`PropertyAnimation`] for animated values
//! - [`ScaleAnimation`] for the press effect
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use segue::widget::animation::{Easing, PropertyAnimation};
//!
//! let start = Instant::now();
//! let duration = Duration::from_millis(100);
//! let scale = PropertyAnimation::new(1.0_f32, 0.95, Easing::EaseOut, duration, start);
//! assert_eq!(scale.value_at(start + Duration::from_millis(100)), 0.95);
//! ```

mod easing;
mod transition;
mod tween;

pub use easing::{Easing, ease, lerp_eased};
pub use transition::{Transition, TransitionKind};
pub use tween::{Interpolate, PropertyAnimation, ScaleAnimation, Tween};
