//! HSL representation and hex conversion.
//!
//! Hue is in degrees `[0, 360)`, saturation and lightness are percentages
//! `[0, 100]`. All harmony maths happens in this space; hex is the external
//! representation.

use crate::error::Result;

use super::Colour;

/// A hue/saturation/lightness triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Create a normalised triple.
    ///
    /// Hue wraps into `[0, 360)`; saturation and lightness clamp to `[0, 100]`.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Round every component to a whole number, keeping hue in range.
    pub fn round(self) -> Self {
        Self::new(
            self.hue.round(),
            self.saturation.round(),
            self.lightness.round(),
        )
    }

    /// Rotate the hue by `degrees`, wrapping around the wheel.
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness)
    }

    pub fn with_saturation(self, saturation: f64) -> Self {
        Self::new(self.hue, saturation, self.lightness)
    }

    pub fn with_lightness(self, lightness: f64) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    /// Convert to sRGB.
    ///
    /// Uses the piecewise form `f(n) = l - a * clamp(min(k - 3, 9 - k, 1), -1, 1)`
    /// with `k = (n + h / 30) mod 12` and `a = s * min(l, 1 - l)`, where
    /// `(r, g, b) = (f(0), f(8), f(4))`.
    pub fn to_colour(self) -> Colour {
        let h = wrap_hue(self.hue);
        let s = self.saturation.clamp(0.0, 100.0) / 100.0;
        let l = self.lightness.clamp(0.0, 100.0) / 100.0;
        let a = s * l.min(1.0 - l);

        let f = |n: f64| -> u8 {
            let k = (n + h / 30.0) % 12.0;
            let factor = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            let channel = l - a * factor;
            (255.0 * channel).round().clamp(0.0, 255.0) as u8
        };

        Colour::rgb(f(0.0), f(8.0), f(4.0))
    }
}

impl From<Colour> for Hsl {
    /// Standard max/min channel decomposition.
    fn from(colour: Colour) -> Self {
        let r = colour.r as f64 / 255.0;
        let g = colour.g as f64 / 255.0;
        let b = colour.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

impl From<Hsl> for Colour {
    fn from(hsl: Hsl) -> Self {
        hsl.to_colour()
    }
}

/// Parse a `#rrggbb` string into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Hsl::from(Colour::from_hex(hex)?))
}

/// Format an HSL triple as lowercase `#rrggbb`.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_colour().to_string()
}

/// Reduce a hue into `[0, 360)`.
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
