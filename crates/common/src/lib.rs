//! Shared value types used across the flight kernel, input router and renderer.

mod types;

pub use types::{Axis, Color, ColorParseError, Control, EmptyPalette, Palette};
