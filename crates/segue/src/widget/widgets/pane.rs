//! The three stacked panes inside a button.

use segue_render::Size;

use super::activity_indicator::ActivityIndicator;
use super::label::Label;
use super::transition_button::ButtonState;

/// Which pane a state shows.
///
/// Panes are stacked vertically in index order; the button slides its content
/// up by `index * height` to bring a pane into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneKind {
    /// Holds the first label.
    Idle,
    /// Holds the activity indicator.
    Loading,
    /// Holds the second label. Shared by success and failure.
    Finished,
}

impl PaneKind {
    /// Every pane, top to bottom.
    pub const ALL: [PaneKind; 3] = [PaneKind::Idle, PaneKind::Loading, PaneKind::Finished];

    /// The pane shown for `state`.
    pub const fn for_state(state: ButtonState) -> Self {
        match state {
            ButtonState::Idle => Self::Idle,
            ButtonState::Loading => Self::Loading,
            ButtonState::Success | ButtonState::Failure => Self::Finished,
        }
    }

    /// Stacking position, from the top.
    pub const fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Loading => 1,
            Self::Finished => 2,
        }
    }

    /// Vertical content offset that brings this pane into view.
    #[inline]
    pub fn offset(self, height: f32) -> f32 {
        self.index() as f32 * height
    }
}

/// What a pane displays.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneContent {
    Label(Label),
    Indicator(ActivityIndicator),
}

/// A static container created with the button.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    kind: PaneKind,
    content: PaneContent,
}

impl Pane {
    pub fn new(kind: PaneKind, content: PaneContent) -> Self {
        Self { kind, content }
    }

    #[inline]
    pub fn kind(&self) -> PaneKind {
        self.kind
    }

    #[inline]
    pub fn content(&self) -> &PaneContent {
        &self.content
    }

    pub fn label(&self) -> Option<&Label> {
        match &self.content {
            PaneContent::Label(label) => Some(label),
            PaneContent::Indicator(_) => None,
        }
    }

    pub fn label_mut(&mut self) -> Option<&mut Label> {
        match &mut self.content {
            PaneContent::Label(label) => Some(label),
            PaneContent::Indicator(_) => None,
        }
    }

    pub fn indicator(&self) -> Option<&ActivityIndicator> {
        match &self.content {
            PaneContent::Indicator(indicator) => Some(indicator),
            PaneContent::Label(_) => None,
        }
    }

    pub fn indicator_mut(&mut self) -> Option<&mut ActivityIndicator> {
        match &mut self.content {
            PaneContent::Indicator(indicator) => Some(indicator),
            PaneContent::Label(_) => None,
        }
    }

    /// Size of the content as last measured.
    pub fn content_size(&self) -> Size {
        match &self.content {
            PaneContent::Label(label) => label.size(),
            PaneContent::Indicator(indicator) => indicator.size(),
        }
    }
}
