//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GradiaError, Result};

/// An opaque sRGB colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#rrggbb` hex colour string (case-insensitive).
    ///
    /// Anything else, including the 3-digit shorthand, is rejected with
    /// `InvalidColor`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| GradiaError::invalid_color(trimmed))?;

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GradiaError::invalid_color(trimmed));
        }

        let r = parse_hex_byte(&hex[0..2], trimmed)?;
        let g = parse_hex_byte(&hex[2..4], trimmed)?;
        let b = parse_hex_byte(&hex[4..6], trimmed)?;
        Ok(Self::rgb(r, g, b))
    }

    /// A uniformly random colour.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value: u32 = rng.random_range(0..0xFF_FFFF);
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Convert to an opaque RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights).
    pub fn brightness(self) -> f32 {
        (self.r as f32 * 299.0 + self.g as f32 * 587.0 + self.b as f32 * 114.0) / 1000.0
    }

    /// Whether light text reads better than dark text on this colour.
    pub fn is_dark(self) -> bool {
        self.brightness() < 128.0
    }
}

impl FromStr for Colour {
    type Err = GradiaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str, original: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| GradiaError::invalid_color(original))
}
