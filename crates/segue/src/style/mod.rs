//! Button styling.
//!
//! A [`StylePalette`] maps every [`PaletteRole`] to the background and text
//! colors the button shows in that role. Palettes are built once, from
//! [`ButtonColors`] or a [`ButtonConfig`](crate::ButtonConfig), and never
//! change afterwards.

mod palette;

pub use palette::{ButtonColors, PaletteRole, StyleEntry, StylePalette};
