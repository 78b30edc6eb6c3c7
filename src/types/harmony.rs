//! Colour-harmony palette generation.
//!
//! A harmony picks related hues from one base colour by their angle on the
//! hue wheel. `generate_palette` turns a base colour plus a harmony into a
//! fixed layout of gradient stops.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradiaError, Result};

use super::{ColorStop, Colour, Hsl};

/// Accepted range for the analogous hue spread, in degrees.
pub const HUE_RANGE: (u32, u32) = (10, 90);

/// Accepted range for the saturation boost.
pub const SATURATION_BOOST: (u32, u32) = (40, 120);

/// Default analogous hue spread.
pub const DEFAULT_HUE_RANGE: u32 = 30;

/// Default saturation boost. 80 leaves saturation unchanged.
pub const DEFAULT_SATURATION_BOOST: u32 = 80;

/// A colour-harmony rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    /// Tints and shades of one hue
    #[default]
    Shades,
    /// Base and its opposite (180°)
    Complementary,
    /// Neighbouring hues, `hue_range` apart
    Analogous,
    /// Three hues 120° apart
    Triadic,
    /// Base plus the two neighbours of its complement
    SplitComplementary,
    /// Four hues 90° apart
    Tetradic,
    /// Four hues 90° apart (same layout as tetradic)
    Square,
    /// Two complementary pairs 60° apart
    Rectangular,
}

impl HarmonyKind {
    /// Every harmony kind, in display order.
    pub const ALL: [HarmonyKind; 8] = [
        HarmonyKind::Shades,
        HarmonyKind::Complementary,
        HarmonyKind::Analogous,
        HarmonyKind::Triadic,
        HarmonyKind::SplitComplementary,
        HarmonyKind::Tetradic,
        HarmonyKind::Square,
        HarmonyKind::Rectangular,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Shades => "shades",
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::SplitComplementary => "split-complementary",
            HarmonyKind::Tetradic => "tetradic",
            HarmonyKind::Square => "square",
            HarmonyKind::Rectangular => "rectangular",
        }
    }

    /// Stop positions, one per generated colour.
    pub fn positions(self) -> &'static [f64] {
        match self {
            HarmonyKind::Shades | HarmonyKind::Analogous => &[0.0, 25.0, 50.0, 75.0, 100.0],
            HarmonyKind::Complementary => &[0.0, 100.0],
            HarmonyKind::Triadic | HarmonyKind::SplitComplementary => &[0.0, 50.0, 100.0],
            HarmonyKind::Tetradic | HarmonyKind::Square | HarmonyKind::Rectangular => {
                &[0.0, 33.0, 67.0, 100.0]
            }
        }
    }

    /// Fixed hue offsets from the base hue, for kinds that use them.
    ///
    /// `shades` keeps a single hue and `analogous` depends on the hue range,
    /// so both return `None`.
    pub fn hue_offsets(self) -> Option<&'static [f64]> {
        match self {
            HarmonyKind::Shades | HarmonyKind::Analogous => None,
            HarmonyKind::Complementary => Some(&[0.0, 180.0]),
            HarmonyKind::Triadic => Some(&[0.0, 120.0, 240.0]),
            HarmonyKind::SplitComplementary => Some(&[0.0, 150.0, 210.0]),
            // Square intentionally shares the tetradic wheel positions.
            HarmonyKind::Tetradic | HarmonyKind::Square => Some(&[0.0, 90.0, 180.0, 270.0]),
            HarmonyKind::Rectangular => Some(&[0.0, 60.0, 180.0, 240.0]),
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyKind {
    type Err = GradiaError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        HarmonyKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| GradiaError::Parse {
                message: format!("Unknown harmony: {}", s),
                help: Some(format!(
                    "Available harmonies: {}",
                    HarmonyKind::ALL.map(HarmonyKind::name).join(", ")
                )),
            })
    }
}

/// Parameters for one palette request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonyOptions {
    pub harmony: HarmonyKind,
    /// Hue spread between analogous neighbours, degrees.
    pub hue_range: u32,
    /// Saturation adjustment; the effective saturation is `s + boost - 80`.
    pub saturation_boost: u32,
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self {
            harmony: HarmonyKind::default(),
            hue_range: DEFAULT_HUE_RANGE,
            saturation_boost: DEFAULT_SATURATION_BOOST,
        }
    }
}

impl HarmonyOptions {
    pub fn new(harmony: HarmonyKind) -> Self {
        Self {
            harmony,
            ..Self::default()
        }
    }

    /// Copy with slider values pulled into their accepted ranges.
    pub fn clamped(self) -> Self {
        Self {
            harmony: self.harmony,
            hue_range: self.hue_range.clamp(HUE_RANGE.0, HUE_RANGE.1),
            saturation_boost: self
                .saturation_boost
                .clamp(SATURATION_BOOST.0, SATURATION_BOOST.1),
        }
    }
}

/// Generate gradient stops for `base` using a harmony rule.
///
/// Out-of-range sliders are clamped. Fails with `InvalidColor` when `base` is
/// not a `#rrggbb` string.
pub fn generate_palette(
    base: &str,
    harmony: HarmonyKind,
    hue_range: u32,
    saturation_boost: u32,
) -> Result<Vec<ColorStop>> {
    let base = Colour::from_hex(base)?;
    Ok(palette_from_colour(
        base,
        HarmonyOptions {
            harmony,
            hue_range,
            saturation_boost,
        },
    ))
}

/// Generate gradient stops from an already-parsed base colour.
pub fn palette_from_colour(base: Colour, options: HarmonyOptions) -> Vec<ColorStop> {
    let options = options.clamped();
    let hsl = Hsl::from(base).round();
    let saturation = (hsl.saturation + options.saturation_boost as f64 - 80.0).min(100.0);
    let boosted = hsl.with_saturation(saturation);
    let positions = options.harmony.positions();

    match options.harmony {
        HarmonyKind::Shades => positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let lightness = (hsl.lightness - 30.0 + i as f64 * 15.0).clamp(10.0, 90.0);
                ColorStop::new(boosted.with_lightness(lightness).to_colour(), position)
            })
            .collect(),

        HarmonyKind::Analogous => positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let offset = (i as f64 - 2.0) * options.hue_range as f64;
                ColorStop::new(boosted.rotate(offset).to_colour(), position)
            })
            .collect(),

        kind => {
            let offsets = kind.hue_offsets().unwrap_or(&[0.0]);
            offsets
                .iter()
                .zip(positions)
                .map(|(&offset, &position)| {
                    // The anchor stop is the base colour itself.
                    let colour = if offset == 0.0 {
                        base
                    } else {
                        boosted.rotate(offset).to_colour()
                    };
                    ColorStop::new(colour, position)
                })
                .collect()
        }
    }
}
