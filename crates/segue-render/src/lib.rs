//! Value types shared by Segue widgets and the hosts that paint them.
//!
//! - [`Point`], [`Size`], [`Rect`] for geometry in logical pixels
//! - [`Color`] for straight-alpha RGBA colors
//! - [`Font`] and [`TextMetrics`] for measuring label content

mod text;
mod types;

pub use text::{AdvanceMetrics, Font, FontFamily, TextMetrics};
pub use types::{Color, Point, Rect, Size};
