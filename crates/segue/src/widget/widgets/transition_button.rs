//! Animated four-state button.
//!
//! [`TransitionButton`] stacks three [`Pane`]s vertically and keeps one of
//! them in view. Changing the [`ButtonState`] slides the stack to the pane
//! for the new state, restyles the button from its [`StylePalette`] and
//! resizes it around the visible content.
//!
//! # Transitions
//!
//! Transitions run strictly one at a time. A [`set_state`] made while one is
//! running is queued and starts, from wherever the presentation is at that
//! moment, once the running one completes. Targets (offset, width, colors)
//! are computed when a transition starts, not when it is queued.
//!
//! # Failure revert
//!
//! When a failure transition completes and the button is still failing, a
//! one-shot timer is started on the [`MainLoop`]. The button owns the timer
//! by id. Once [`handle_event`] sees it fire, the button returns to
//! [`ButtonState::Idle`] through a fade. Any [`set_state`] call, or dropping
//! the button, stops a pending revert.
//!
//! # Driving the button
//!
//! The host calls [`tick`] once per frame, forwards pointer input with
//! [`handle_mouse_press`] / [`handle_mouse_release`], forwards main loop
//! events with [`handle_event`] and paints [`frame`].
//!
//! [`set_state`]: TransitionButton::set_state
//! [`handle_event`]: TransitionButton::handle_event
//! [`handle_mouse_press`]: TransitionButton::handle_mouse_press
//! [`handle_mouse_release`]: TransitionButton::handle_mouse_release
//! [`tick`]: TransitionButton::tick
//! [`frame`]: TransitionButton::frame

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use segue_core::logging::targets;
use segue_core::{LoopEvent, MainLoop, PerfSpan, Signal, TimerId};
use segue_render::{Font, Point, Rect, Size, TextMetrics};

use super::activity_indicator::ActivityIndicator;
use super::label::Label;
use super::pane::{Pane, PaneContent, PaneKind};
use super::presentation::{Appearance, ButtonFrame, FadeFrame};
use crate::config::{ButtonConfig, ButtonTimings};
use crate::error::Result;
use crate::style::{PaletteRole, StyleEntry, StylePalette};
use crate::widget::animation::{ScaleAnimation, Transition, TransitionKind, Tween};
use crate::widget::events::{MouseButton, MousePressEvent, MouseReleaseEvent};

/// The state a [`TransitionButton`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Waiting for the user. The only state that accepts input.
    #[default]
    Idle,
    /// An operation is running; the activity indicator spins.
    Loading,
    /// The operation succeeded.
    Success,
    /// The operation failed. Reverts to idle on its own.
    Failure,
}

impl ButtonState {
    /// Whether pointer input is accepted in this state.
    #[inline]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The pane this state shows.
    #[inline]
    pub const fn pane(self) -> PaneKind {
        PaneKind::for_state(self)
    }

    /// The palette role applied when this state is entered, if any.
    ///
    /// Loading keeps whatever colors the button shows when it starts.
    const fn palette_role(self, enabled: bool) -> Option<PaletteRole> {
        match self {
            Self::Idle if enabled => Some(PaletteRole::Normal),
            Self::Idle => Some(PaletteRole::Disabled),
            Self::Loading => None,
            Self::Success => Some(PaletteRole::Success),
            Self::Failure => Some(PaletteRole::Failure),
        }
    }
}

/// A queued change of presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TransitionRequest {
    state: ButtonState,
    kind: TransitionKind,
}

/// The transition currently animating the presentation.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    state: ButtonState,
    transition: Transition,
    tween: Tween<Appearance>,
    /// Outgoing appearance for fades.
    fade_from: Option<Appearance>,
}

/// A button that animates between idle, loading, success and failure.
///
/// # Signals
///
/// - `clicked`: released inside the bounds after a press
/// - `pressed` / `released`: the press effect started or ended
/// - `state_changed`: [`set_state`](Self::set_state) or the failure revert
///   changed the state
/// - `transition_finished`: a transition to the given state completed
pub struct TransitionButton {
    main_loop: Arc<MainLoop>,
    metrics: Arc<dyn TextMetrics>,
    palette: StylePalette,
    timings: ButtonTimings,

    state: ButtonState,
    enabled: bool,
    interaction_enabled: bool,
    height: f32,

    /// Indexed by [`PaneKind::index`].
    panes: [Pane; 3],

    appearance: Appearance,
    active: Option<ActiveTransition>,
    pending: VecDeque<TransitionRequest>,
    fade: Option<FadeFrame>,

    scale: f32,
    scale_animation: Option<ScaleAnimation>,
    press_active: bool,

    revert_timer: Option<TimerId>,
    last_tick: Instant,

    /// Emitted on a release inside the bounds.
    pub clicked: Signal<()>,
    /// Emitted when a press is accepted.
    pub pressed: Signal<()>,
    /// Emitted when an accepted press ends, inside or outside.
    pub released: Signal<()>,
    /// Emitted with the new state whenever the state changes.
    pub state_changed: Signal<ButtonState>,
    /// Emitted with the target state when a transition completes.
    pub transition_finished: Signal<ButtonState>,
}

impl TransitionButton {
    /// Default button height.
    pub const DEFAULT_HEIGHT: f32 = 44.0;

    /// Create an idle, enabled button with empty labels and the default
    /// palette, timings and font.
    pub fn new(main_loop: Arc<MainLoop>, metrics: Arc<dyn TextMetrics>) -> Self {
        let font = Font::default();
        let now = main_loop.now();
        let palette = StylePalette::default();
        let normal = palette.entry(PaletteRole::Normal);

        let mut button = Self {
            main_loop,
            metrics,
            palette,
            timings: ButtonTimings::default(),
            state: ButtonState::Idle,
            enabled: true,
            interaction_enabled: true,
            height: Self::DEFAULT_HEIGHT,
            panes: [
                Pane::new(PaneKind::Idle, PaneContent::Label(Label::new("", font.clone()))),
                Pane::new(PaneKind::Loading, PaneContent::Indicator(ActivityIndicator::new())),
                Pane::new(PaneKind::Finished, PaneContent::Label(Label::new("", font))),
            ],
            appearance: Appearance {
                offset_y: 0.0,
                width: Self::DEFAULT_HEIGHT,
                background: normal.background,
                text_color: normal.text,
            },
            active: None,
            pending: VecDeque::new(),
            fade: None,
            scale: 1.0,
            scale_animation: None,
            press_active: false,
            revert_timer: None,
            last_tick: now,
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
            state_changed: Signal::new(),
            transition_finished: Signal::new(),
        };
        button.snap_to_state();
        button
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Use `palette` for every role.
    pub fn with_palette(mut self, palette: StylePalette) -> Self {
        self.palette = palette;
        self.snap_to_state();
        self
    }

    /// Use `timings` for every animation.
    pub fn with_timings(mut self, timings: ButtonTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Use `font` for both labels.
    pub fn with_font(mut self, font: Font) -> Self {
        for pane in &mut self.panes {
            if let Some(label) = pane.label_mut() {
                label.set_font(font.clone());
            }
        }
        self.snap_to_state();
        self
    }

    /// Apply palette, timings and font from a configuration.
    pub fn with_config(self, config: &ButtonConfig) -> Result<Self> {
        let palette = config.palette()?;
        let timings = config.timings()?;
        let font = config.font()?;
        Ok(self.with_timings(timings).with_palette(palette).with_font(font))
    }

    /// Set the height; offsets and the minimum width follow it.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height.max(0.0);
        self.snap_to_state();
        self
    }

    /// Set the text shown while idle.
    pub fn with_first_label_text(mut self, text: impl Into<String>) -> Self {
        if let Some(label) = self.panes[PaneKind::Idle.index()].label_mut() {
            label.set_text(text);
        }
        self.snap_to_state();
        self
    }

    /// Set the text shown on success or failure.
    pub fn with_second_label_text(mut self, text: impl Into<String>) -> Self {
        if let Some(label) = self.panes[PaneKind::Finished.index()].label_mut() {
            label.set_text(text);
        }
        self.snap_to_state();
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    #[inline]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Change the state and queue the transition that presents it.
    ///
    /// The state, input flag and activity indicator change at once; offset,
    /// width and colors animate. A pending failure revert is stopped.
    pub fn set_state(&mut self, state: ButtonState) {
        self.cancel_revert();
        self.change_state(state, TransitionKind::Slide);
    }

    fn change_state(&mut self, state: ButtonState, kind: TransitionKind) {
        let now = self.main_loop.now();
        let previous = self.state;

        self.state = state;
        self.interaction_enabled = state.accepts_input();
        self.update_indicator(now);

        if previous != state {
            tracing::debug!(
                target: targets::BUTTON,
                from = ?previous,
                to = ?state,
                "state changed"
            );
            self.state_changed.emit(state);
        }

        self.enqueue(TransitionRequest { state, kind }, now);
    }

    /// Whether the button is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the button.
    ///
    /// The normal or disabled palette applies immediately, whatever the
    /// state. Disabling cancels a press in progress without clicking.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        tracing::debug!(target: targets::BUTTON, enabled, "enabled changed");

        self.apply_colors(self.palette.entry(self.idle_role()));

        if !enabled && self.press_active {
            self.press_active = false;
            let now = self.main_loop.now();
            self.animate_scale(1.0, now);
        }
    }

    /// Whether the current state accepts pointer input.
    #[inline]
    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Whether a press is being held.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.press_active
    }

    /// Whether a transition is animating.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Number of transitions waiting behind the running one.
    #[inline]
    pub fn queued_transitions(&self) -> usize {
        self.pending.len()
    }

    /// The pending failure revert timer, if any.
    #[inline]
    pub fn revert_timer(&self) -> Option<TimerId> {
        self.revert_timer
    }

    // =========================================================================
    // Labels
    // =========================================================================

    pub fn first_label_text(&self) -> &str {
        self.label_text(PaneKind::Idle)
    }

    pub fn second_label_text(&self) -> &str {
        self.label_text(PaneKind::Finished)
    }

    /// Set the text shown while idle.
    ///
    /// The label is measured at once; if it is in view, the current state is
    /// presented again so the width follows the text.
    pub fn set_first_label_text(&mut self, text: impl Into<String>) {
        self.set_label_text(PaneKind::Idle, text.into());
    }

    /// Set the text shown on success or failure.
    pub fn set_second_label_text(&mut self, text: impl Into<String>) {
        self.set_label_text(PaneKind::Finished, text.into());
    }

    fn set_label_text(&mut self, kind: PaneKind, text: String) {
        let metrics = &*self.metrics;
        let Some(label) = self.panes[kind.index()].label_mut() else {
            return;
        };
        if !label.set_text(text) {
            return;
        }
        let size = label.size_to_fit(metrics);
        tracing::trace!(target: targets::LAYOUT, pane = ?kind, width = size.width, "label resized");

        if self.state.pane() == kind {
            let now = self.main_loop.now();
            self.enqueue(
                TransitionRequest {
                    state: self.state,
                    kind: TransitionKind::Slide,
                },
                now,
            );
        }
    }

    fn label_text(&self, kind: PaneKind) -> &str {
        self.panes[kind.index()].label().map_or("", Label::text)
    }

    /// The pane of the given kind.
    pub fn pane(&self, kind: PaneKind) -> &Pane {
        &self.panes[kind.index()]
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Measure every label whose text or font changed since it was last
    /// measured.
    pub fn ensure_layout(&mut self) {
        let _span = PerfSpan::new("ensure_layout");
        let metrics = &*self.metrics;
        for pane in &mut self.panes {
            let kind = pane.kind();
            if let Some(label) = pane.label_mut() {
                if label.needs_measure() {
                    let size = label.size_to_fit(metrics);
                    tracing::trace!(
                        target: targets::LAYOUT,
                        pane = ?kind,
                        width = size.width,
                        "label measured"
                    );
                }
            }
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current size: fitted width, host-given height.
    pub fn size(&self) -> Size {
        Size::new(self.appearance.width, self.height)
    }

    /// Change the host-given bounds.
    ///
    /// Only the height is taken from `size`; the width always fits the
    /// content. Running and queued transitions complete at once and the
    /// current state is presented without animation.
    pub fn set_size(&mut self, size: Size) {
        let height = size.height.max(0.0);
        if height == self.height {
            return;
        }
        self.height = height;

        let now = self.main_loop.now();
        while self.active.is_some() {
            self.finish_active(now);
        }
        self.snap_to_state();
        self.last_tick = now;
    }

    /// Content width of the pane in view, plus padding, never narrower than
    /// the height.
    fn fitted_width(&self, kind: PaneKind) -> f32 {
        let content = self.panes[kind.index()].content_size().width;
        (content + self.height / 2.0).max(self.height)
    }

    fn target_appearance(&self, state: ButtonState) -> Appearance {
        let pane = state.pane();
        // A held press keeps its colors until release.
        let role = if self.press_active && state == ButtonState::Idle {
            Some(PaletteRole::Pressed)
        } else {
            state.palette_role(self.enabled)
        };
        let colors = match role {
            Some(role) => self.palette.entry(role),
            None => StyleEntry::new(self.appearance.background, self.appearance.text_color),
        };
        Appearance {
            offset_y: pane.offset(self.height),
            width: self.fitted_width(pane),
            background: colors.background,
            text_color: colors.text,
        }
    }

    /// Present the current state immediately, discarding any transition.
    fn snap_to_state(&mut self) {
        self.ensure_layout();
        self.appearance = self.target_appearance(self.state);
        self.active = None;
        self.pending.clear();
        self.fade = None;
    }

    fn idle_role(&self) -> PaletteRole {
        if self.enabled {
            PaletteRole::Normal
        } else {
            PaletteRole::Disabled
        }
    }

    /// Set the colors now, including on the running transition so it does
    /// not animate them back.
    fn apply_colors(&mut self, entry: StyleEntry) {
        self.appearance.background = entry.background;
        self.appearance.text_color = entry.text;
        if let Some(active) = &mut self.active {
            for end in [&mut active.tween.from, &mut active.tween.to] {
                end.background = entry.background;
                end.text_color = entry.text;
            }
        }
    }

    fn update_indicator(&mut self, now: Instant) {
        let loading = self.state == ButtonState::Loading;
        if let Some(indicator) = self.panes[PaneKind::Loading.index()].indicator_mut() {
            if loading {
                indicator.start(now);
            } else {
                indicator.stop();
            }
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn enqueue(&mut self, request: TransitionRequest, now: Instant) {
        if self.active.is_some() {
            tracing::trace!(target: targets::BUTTON, state = ?request.state, "transition queued");
            self.pending.push_back(request);
        } else {
            self.start(request, now);
        }
    }

    fn start(&mut self, request: TransitionRequest, at: Instant) {
        self.ensure_layout();
        let target = self.target_appearance(request.state);

        let (duration, easing) = match request.kind {
            TransitionKind::Slide => (self.timings.transition, self.timings.transition_easing),
            TransitionKind::Fade => (self.timings.fade, self.timings.fade_easing),
        };
        let transition = Transition::new(request.kind, easing, duration, at);

        let (tween, fade_from) = match request.kind {
            TransitionKind::Slide => (Tween::new(self.appearance, target), None),
            TransitionKind::Fade => {
                let outgoing = self.appearance;
                self.appearance = target;
                self.fade = Some(FadeFrame {
                    from: outgoing,
                    progress: 0.0,
                });
                (Tween::new(target, target), Some(outgoing))
            }
        };

        tracing::debug!(
            target: targets::BUTTON,
            state = ?request.state,
            kind = ?request.kind,
            width = target.width,
            offset = target.offset_y,
            "transition started"
        );

        self.active = Some(ActiveTransition {
            state: request.state,
            transition,
            tween,
            fade_from,
        });
    }

    /// Complete the running transition and start the next queued one where
    /// it ended.
    fn finish_active(&mut self, now: Instant) {
        let Some(finished) = self.active.take() else {
            return;
        };
        let ended_at = finished.transition.ends_at();
        self.appearance = finished.tween.to;
        self.fade = None;

        tracing::trace!(target: targets::BUTTON, state = ?finished.state, "transition finished");
        self.transition_finished.emit(finished.state);

        if finished.state == ButtonState::Failure
            && self.state == ButtonState::Failure
            && self.pending.is_empty()
            && self.revert_timer.is_none()
        {
            self.schedule_revert(now, ended_at);
        }

        if let Some(next) = self.pending.pop_front() {
            self.start(next, ended_at);
        }
    }

    /// Advance animations to the main loop's current time.
    pub fn tick(&mut self) {
        let now = self.main_loop.now();

        if let Some(animation) = self.scale_animation {
            self.scale = animation.value_at(now);
            if animation.is_finished_at(now) {
                self.scale_animation = None;
            }
        }

        while let Some(active) = self.active {
            if active.transition.is_finished_at(now) {
                self.finish_active(now);
                continue;
            }
            let progress = active.transition.progress_at(now);
            match active.fade_from {
                Some(from) => self.fade = Some(FadeFrame { from, progress }),
                None => self.appearance = active.tween.value_at(progress),
            }
            break;
        }

        self.last_tick = now;
    }

    // =========================================================================
    // Failure revert
    // =========================================================================

    /// Start the revert timer, measuring the delay from when the failure
    /// transition ended rather than from when it was noticed.
    fn schedule_revert(&mut self, now: Instant, ended_at: Instant) {
        let late = now.saturating_duration_since(ended_at);
        let delay = self.timings.revert_delay.saturating_sub(late);
        let id = self.main_loop.start_timer(delay);
        tracing::debug!(
            target: targets::BUTTON,
            delay_ms = delay.as_millis() as u64,
            "failure revert scheduled"
        );
        self.revert_timer = Some(id);
    }

    fn cancel_revert(&mut self) {
        if let Some(id) = self.revert_timer.take() {
            if let Err(err) = self.main_loop.stop_timer(id) {
                tracing::trace!(target: targets::BUTTON, %err, "revert timer already gone");
            } else {
                tracing::debug!(target: targets::BUTTON, "failure revert cancelled");
            }
        }
    }

    fn revert(&mut self) {
        self.revert_timer = None;
        tracing::debug!(target: targets::BUTTON, "reverting failure");
        self.change_state(ButtonState::Idle, TransitionKind::Fade);
    }

    /// Handle a main loop event.
    ///
    /// Returns `true` if the event was this button's revert timer. Frame
    /// events advance the animations and return `false`, since every widget
    /// on the loop wants them.
    pub fn handle_event(&mut self, event: &LoopEvent) -> bool {
        match event {
            LoopEvent::Timer { id } if self.revert_timer == Some(*id) => {
                self.revert();
                true
            }
            LoopEvent::Frame => {
                self.tick();
                false
            }
            _ => false,
        }
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Handle a press. Returns `true` if the press was accepted.
    ///
    /// Only the primary button is accepted, and only while the button is
    /// enabled and idle.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if !self.enabled || !self.interaction_enabled || self.press_active {
            return false;
        }

        let now = self.main_loop.now();
        self.press_active = true;
        self.animate_scale(self.timings.press_scale, now);
        self.apply_colors(self.palette.entry(PaletteRole::Pressed));

        self.pressed.emit(());
        true
    }

    /// Handle a release. Returns `true` if it was a click, which is a release
    /// inside the bounds ending an accepted press.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || !self.press_active {
            return false;
        }

        let now = self.main_loop.now();
        self.press_active = false;
        self.animate_scale(1.0, now);
        if matches!(self.state, ButtonState::Idle | ButtonState::Loading) {
            self.apply_colors(self.palette.entry(self.idle_role()));
        }
        self.released.emit(());

        let inside = self.contains(event.local_pos);
        if inside {
            self.clicked.emit(());
        }
        inside
    }

    /// Whether `pos`, in local coordinates, is inside the unscaled bounds.
    pub fn contains(&self, pos: Point) -> bool {
        Rect::from_size(self.size()).contains(pos)
    }

    fn animate_scale(&mut self, to: f32, now: Instant) {
        let from = match self.scale_animation {
            Some(animation) => animation.value_at(now),
            None => self.scale,
        };
        self.scale = from;
        self.scale_animation = Some(ScaleAnimation::new(
            from,
            to,
            self.timings.press_easing,
            self.timings.press,
            now,
        ));
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    #[inline]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn palette(&self) -> &StylePalette {
        &self.palette
    }

    #[inline]
    pub fn timings(&self) -> &ButtonTimings {
        &self.timings
    }

    /// The presentation as of the last [`tick`](Self::tick).
    pub fn frame(&self) -> ButtonFrame {
        let indicator_rotation = self.panes[PaneKind::Loading.index()]
            .indicator()
            .map_or(0.0, |indicator| indicator.rotation_at(self.last_tick));

        ButtonFrame {
            state: self.state,
            visible_pane: self.state.pane(),
            size: self.size(),
            content_offset_y: self.appearance.offset_y,
            background: self.appearance.background,
            text_color: self.appearance.text_color,
            scale: self.scale,
            corner_radius: self.height / 2.0,
            fade: self.fade,
            indicator_rotation,
            enabled: self.enabled,
            interaction_enabled: self.interaction_enabled,
        }
    }

    /// Time until the running transition completes, if one is running.
    pub fn time_remaining(&self) -> Option<Duration> {
        let now = self.main_loop.now();
        self.active
            .map(|active| active.transition.ends_at().saturating_duration_since(now))
    }
}

impl Drop for TransitionButton {
    fn drop(&mut self) {
        self.cancel_revert();
    }
}

impl std::fmt::Debug for TransitionButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionButton")
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("appearance", &self.appearance)
            .field("scale", &self.scale)
            .field("queued", &self.pending.len())
            .field("revert_timer", &self.revert_timer)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(TransitionButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use segue_core::ManualClock;
    use segue_render::AdvanceMetrics;

    fn button() -> (ManualClock, Arc<MainLoop>, TransitionButton) {
        let clock = ManualClock::new();
        let main_loop = MainLoop::with_clock(Arc::new(clock.clone()));
        let metrics = Arc::new(AdvanceMetrics::new(0.5, 1.2));
        let button = TransitionButton::new(main_loop.clone(), metrics)
            .with_font(Font::default().with_size(10.0))
            .with_first_label_text("Submit")
            .with_second_label_text("Done");
        (clock, main_loop, button)
    }

    #[test]
    fn test_initial_presentation() {
        let (_clock, _loop, button) = button();
        let frame = button.frame();

        assert_eq!(frame.state, ButtonState::Idle);
        assert_eq!(frame.content_offset_y, 0.0);
        // "Submit": 6 graphemes * 5px + 44 / 2 padding.
        assert_eq!(frame.size, Size::new(52.0, 44.0));
        assert_eq!(frame.background, StylePalette::default().entry(PaletteRole::Normal).background);
        assert_eq!(frame.corner_radius, 22.0);
        assert!(!button.is_transitioning());
    }

    #[test]
    fn test_loading_keeps_current_colors() {
        let (clock, _loop, mut button) = button();
        let before = button.appearance();

        button.set_state(ButtonState::Loading);
        clock.advance_ms(200);
        button.tick();

        let after = button.appearance();
        assert_eq!(after.background, before.background);
        assert_eq!(after.text_color, before.text_color);
        assert_eq!(after.offset_y, 44.0);
        // Indicator is 20 wide: 20 + 22 < 44, so the height wins.
        assert_eq!(after.width, 44.0);
    }

    #[test]
    fn test_transition_interpolates_midway() {
        let (clock, _loop, mut button) = button();
        button.set_state(ButtonState::Success);

        clock.advance_ms(100);
        button.tick();
        let offset = button.appearance().offset_y;
        assert!(offset > 44.0 && offset < 88.0, "offset = {offset}");
        assert!(button.is_transitioning());
    }

    #[test]
    fn test_input_disabled_outside_idle() {
        let (_clock, _loop, mut button) = button();
        button.set_state(ButtonState::Loading);
        assert!(!button.is_interaction_enabled());
        assert!(!button.handle_mouse_press(&MousePressEvent::left(Point::new(5.0, 5.0))));

        button.set_state(ButtonState::Idle);
        assert!(button.is_interaction_enabled());
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let (_clock, _loop, mut button) = button();
        let press = MousePressEvent::new(MouseButton::Right, Point::new(5.0, 5.0));
        assert!(!button.handle_mouse_press(&press));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_press_scales_down() {
        let (clock, _loop, mut button) = button();
        assert!(button.handle_mouse_press(&MousePressEvent::left(Point::new(5.0, 5.0))));
        assert_eq!(
            button.appearance().background,
            button.palette().entry(PaletteRole::Pressed).background
        );

        clock.advance_ms(100);
        button.tick();
        assert!((button.scale() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_disabling_cancels_press() {
        let (_clock, _loop, mut button) = button();
        button.handle_mouse_press(&MousePressEvent::left(Point::new(5.0, 5.0)));
        button.set_enabled(false);

        assert!(!button.is_pressed());
        assert!(!button.handle_mouse_release(&MouseReleaseEvent::left(Point::new(5.0, 5.0))));
    }

    #[test]
    fn test_indicator_follows_loading() {
        let (clock, _loop, mut button) = button();
        button.set_state(ButtonState::Loading);
        clock.advance_ms(250);
        button.tick();
        assert!(button.frame().indicator_rotation > 0.0);

        button.set_state(ButtonState::Success);
        assert!(
            !button
                .pane(PaneKind::Loading)
                .indicator()
                .is_some_and(ActivityIndicator::is_animating)
        );
    }

    #[test]
    fn test_set_size_snaps_without_animation() {
        let (clock, _loop, mut button) = button();
        button.set_state(ButtonState::Success);
        clock.advance_ms(50);
        button.set_size(Size::new(300.0, 60.0));

        assert!(!button.is_transitioning());
        assert_eq!(button.appearance().offset_y, 120.0);
        assert_eq!(button.height(), 60.0);
        assert_eq!(button.frame().corner_radius, 30.0);
    }
}
