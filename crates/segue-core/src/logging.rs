//! Logging facilities for Segue.
//!
//! Segue is instrumented with `tracing`. Nothing is printed unless the host
//! installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("segue=debug,segue_core=info")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core main loop target.
    pub const MAIN_LOOP: &str = "segue_core::main_loop";
    /// Timer system target.
    pub const TIMER: &str = "segue_core::timer";
    /// Deferred task target.
    pub const TASK: &str = "segue_core::task";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "segue_core::signal";
    /// Button state machine and transitions.
    pub const BUTTON: &str = "segue::button";
    /// Measurement and layout passes.
    pub const LAYOUT: &str = "segue::layout";
    /// Configuration loading.
    pub const CONFIG: &str = "segue::config";
    /// Timed operations, see [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "segue::perf";
}

/// RAII guard for timing an operation under the `segue::perf` target.
///
/// ```
/// use segue_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("measure_labels");
///     // ...
/// }
/// ```
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a span; it stays active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
