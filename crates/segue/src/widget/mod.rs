//! Widget layer for Segue.
//!
//! - [`animation`]: easing curves, transitions and tweens
//! - [`events`]: pointer input delivered by the host
//! - [`widgets`]: the [`TransitionButton`](widgets::TransitionButton) and
//!   the parts it is built from

pub mod animation;
pub mod events;
pub mod widgets;

pub use events::{MouseButton, MousePressEvent, MouseReleaseEvent};
