//! Events delivered by the Segue main loop.

use crate::timer::TimerId;

/// Events produced by [`MainLoop`](crate::MainLoop) processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    /// A timer has fired.
    Timer {
        /// The timer that fired.
        id: TimerId,
    },

    /// A frame boundary; animated components should advance.
    ///
    /// Only produced by [`MainLoop::run_until`](crate::MainLoop::run_until).
    Frame,

    /// The loop was asked to quit.
    Quit,
}

impl LoopEvent {
    /// The timer id, if this is a timer event.
    pub fn timer_id(&self) -> Option<TimerId> {
        match self {
            Self::Timer { id } => Some(*id),
            _ => None,
        }
    }
}
