use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color with 8 bits per channel.
///
/// Serialized as a `#rrggbb` hex literal so configuration files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color literal must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color literal must have 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color literal: {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered set of colors that new trail segments are drawn from.
///
/// Never empty; construction through [`Palette::new`] rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>")]
pub struct Palette(Vec<Color>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("palette must contain at least one color")]
pub struct EmptyPalette;

impl TryFrom<Vec<Color>> for Palette {
    type Error = EmptyPalette;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors).ok_or(EmptyPalette)
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self(colors))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at `index`, wrapping around the palette length.
    pub fn pick(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Color::rgb(0xff, 0xcb, 0x77),
            Color::rgb(0x00, 0xb4, 0xd8),
            Color::rgb(0xdb, 0x30, 0x69),
        ])
    }
}

/// Position axis, used to report which faces of the flight volume were crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }
}

/// A discrete control edit produced by the input router.
///
/// The kernel consumes controls, never raw key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Add to every velocity component.
    Thrust(f32),
    /// Rotate the heading angle.
    Yaw(f32),
    /// Rotate the azimuth angle.
    Azimuth(f32),
    /// Start a new, colored trail segment and keep the previous ones.
    NewSegment,
}
