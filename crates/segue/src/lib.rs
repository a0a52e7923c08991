//! Segue - an animated four-state button.
//!
//! [`TransitionButton`] moves between [`ButtonState::Idle`],
//! [`ButtonState::Loading`], [`ButtonState::Success`] and
//! [`ButtonState::Failure`]. Each change slides a stack of three panes to the
//! pane for the new state, restyles the button from its [`StylePalette`] and
//! resizes it to fit the visible content. A failure reverts to idle on its own
//! after a short delay.
//!
//! The widget is headless: it computes a [`ButtonFrame`] every
//! [`tick`](TransitionButton::tick) and leaves painting to the host.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use segue::{ButtonState, TransitionButton};
//! use segue::runtime::{MainLoop, ManualClock};
//! use segue::render::AdvanceMetrics;
//!
//! let clock = ManualClock::new();
//! let main_loop = MainLoop::with_clock(Arc::new(clock.clone()));
//! let mut button = TransitionButton::new(main_loop.clone(), Arc::new(AdvanceMetrics::default()))
//!     .with_first_label_text("Submit")
//!     .with_second_label_text("Success");
//!
//! button.set_state(ButtonState::Loading);
//! clock.advance(Duration::from_millis(200));
//! button.tick();
//!
//! let frame = button.frame();
//! assert_eq!(frame.content_offset_y, frame.size.height);
//! ```

mod config;
mod error;
pub mod style;
pub mod widget;

pub use config::{ButtonConfig, ButtonTimings, ColorsSection, FontSection, TimingSection};
pub use error::{ConfigError, Result};
pub use style::{ButtonColors, PaletteRole, StyleEntry, StylePalette};
pub use widget::widgets::{
    ActivityIndicator, Appearance, ButtonFrame, ButtonState, FadeFrame, Label, Pane, PaneContent,
    PaneKind, TransitionButton,
};

/// Main loop, timers and signals.
pub mod runtime {
    pub use segue_core::*;
}

/// Geometry, color and text measurement types.
pub mod render {
    pub use segue_render::*;
}
