//! Palette roles and their colors.

use segue_render::Color;

/// The visual role the button is presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    /// Enabled, at rest.
    Normal,
    /// Held down.
    Pressed,
    /// Disabled.
    Disabled,
    /// Finished successfully.
    Success,
    /// Finished with a failure.
    Failure,
}

impl PaletteRole {
    /// Every role, in table order.
    pub const ALL: [PaletteRole; 5] = [
        PaletteRole::Normal,
        PaletteRole::Pressed,
        PaletteRole::Disabled,
        PaletteRole::Success,
        PaletteRole::Failure,
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Pressed => 1,
            Self::Disabled => 2,
            Self::Success => 3,
            Self::Failure => 4,
        }
    }
}

/// Background and text color for one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleEntry {
    pub background: Color,
    pub text: Color,
}

impl StyleEntry {
    pub const fn new(background: Color, text: Color) -> Self {
        Self { background, text }
    }
}

/// The eight colors a button is configured with.
///
/// Normal and pressed share their pair: the normal text is drawn in the
/// pressed background color and the pressed text in the normal background
/// color, so pressing inverts the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub normal_background: Color,
    pub pressed_background: Color,
    pub disabled_background: Color,
    pub disabled_text: Color,
    pub success_background: Color,
    pub success_text: Color,
    pub failure_background: Color,
    pub failure_text: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            normal_background: Color::from_rgb8(0x00, 0x7A, 0xFF),
            pressed_background: Color::WHITE,
            disabled_background: Color::from_rgb8(0xC8, 0xC8, 0xC8),
            disabled_text: Color::from_rgb8(0x80, 0x80, 0x80),
            success_background: Color::from_rgb8(0x28, 0xA7, 0x45),
            success_text: Color::WHITE,
            failure_background: Color::from_rgb8(0xDC, 0x35, 0x45),
            failure_text: Color::WHITE,
        }
    }
}

/// Immutable role-to-colors table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePalette {
    entries: [StyleEntry; 5],
}

impl StylePalette {
    /// Build the palette from the configured colors.
    pub fn from_colors(colors: &ButtonColors) -> Self {
        Self {
            entries: [
                StyleEntry::new(colors.normal_background, colors.pressed_background),
                StyleEntry::new(colors.pressed_background, colors.normal_background),
                StyleEntry::new(colors.disabled_background, colors.disabled_text),
                StyleEntry::new(colors.success_background, colors.success_text),
                StyleEntry::new(colors.failure_background, colors.failure_text),
            ],
        }
    }

    /// The colors for `role`.
    #[inline]
    pub fn entry(&self, role: PaletteRole) -> StyleEntry {
        self.entries[role.index()]
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self::from_colors(&ButtonColors::default())
    }
}

impl From<ButtonColors> for StylePalette {
    fn from(colors: ButtonColors) -> Self {
        Self::from_colors(&colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_inverts_normal() {
        let palette = StylePalette::default();
        let normal = palette.entry(PaletteRole::Normal);
        let pressed = palette.entry(PaletteRole::Pressed);

        assert_eq!(normal.background, pressed.text);
        assert_eq!(normal.text, pressed.background);
    }

    #[test]
    fn test_every_role_maps_to_its_colors() {
        let colors = ButtonColors {
            disabled_background: Color::GRAY,
            disabled_text: Color::LIGHT_GRAY,
            success_background: Color::from_rgb8(0, 200, 0),
            success_text: Color::BLACK,
            failure_background: Color::from_rgb8(200, 0, 0),
            failure_text: Color::BLACK,
            ..ButtonColors::default()
        };
        let palette = StylePalette::from(colors);

        assert_eq!(
            palette.entry(PaletteRole::Disabled),
            StyleEntry::new(Color::GRAY, Color::LIGHT_GRAY)
        );
        assert_eq!(
            palette.entry(PaletteRole::Success),
            StyleEntry::new(Color::from_rgb8(0, 200, 0), Color::BLACK)
        );
        assert_eq!(
            palette.entry(PaletteRole::Failure),
            StyleEntry::new(Color::from_rgb8(200, 0, 0), Color::BLACK)
        );
        assert_eq!(PaletteRole::ALL.len(), 5);
    }
}
