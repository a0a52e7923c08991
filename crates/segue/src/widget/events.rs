//! Pointer input delivered to widgets.

use segue_render::Point;

/// Mouse (or primary touch) button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button; touches report as this.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
}

/// A button went down over the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePressEvent {
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self { button, local_pos }
    }

    /// A primary-button press at `local_pos`.
    pub fn left(local_pos: Point) -> Self {
        Self::new(MouseButton::Left, local_pos)
    }
}

/// A button that went down over the widget was released, possibly outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseReleaseEvent {
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates; may lie outside the widget.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self { button, local_pos }
    }

    /// A primary-button release at `local_pos`.
    pub fn left(local_pos: Point) -> Self {
        Self::new(MouseButton::Left, local_pos)
    }
}
