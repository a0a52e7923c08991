//! Core systems for Segue.
//!
//! This crate provides the pieces a Segue widget needs from its host:
//!
//! - **Main loop**: cooperative, single-threaded processing of timers and
//!   deferred tasks ([`MainLoop`])
//! - **Clock**: an injectable time source ([`Clock`], [`SystemClock`],
//!   [`ManualClock`])
//! - **Timers**: one-shot and repeating timers identified by [`TimerId`]
//! - **Signals**: closures notified when a widget reports something
//!   ([`Signal`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use segue_core::{LoopEvent, MainLoop, ManualClock, Signal};
//!
//! let clock = ManualClock::new();
//! let main_loop = MainLoop::with_clock(Arc::new(clock.clone()));
//!
//! let timeout = Signal::<()>::new();
//! timeout.connect(|_| println!("timed out"));
//!
//! let id = main_loop.start_timer(Duration::from_millis(200));
//! clock.advance(Duration::from_millis(200));
//! for event in main_loop.process_pending() {
//!     if event == (LoopEvent::Timer { id }) {
//!         timeout.emit(());
//!     }
//! }
//! ```

mod clock;
mod error;
mod event;
pub mod logging;
mod main_loop;
pub mod signal;
mod task;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{LoopError, Result};
pub use event::LoopEvent;
pub use logging::PerfSpan;
pub use main_loop::MainLoop;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::TaskId;
pub use timer::{TimerId, TimerKind, TimerManager};
