//! Widgets provided by Segue.
//!
//! - [`TransitionButton`]: the animated four-state button
//! - [`Label`] and [`ActivityIndicator`]: pane content
//! - [`Pane`]: one of the three stacked containers inside the button
//! - [`ButtonFrame`]: what the host paints each frame

mod activity_indicator;
mod label;
mod pane;
mod presentation;
mod transition_button;

pub use activity_indicator::ActivityIndicator;
pub use label::Label;
pub use pane::{Pane, PaneContent, PaneKind};
pub use presentation::{Appearance, ButtonFrame, FadeFrame};
pub use transition_button::{ButtonState, TransitionButton};
