//! Core domain types for gradia.
//!
//! This module contains the value types shared by the generator, renderers
//! and code formatter:
//! - `Colour` - opaque sRGB colours, written as `#rrggbb`
//! - `Hsl` - the space all harmony maths happens in
//! - `ColorStop` / `Gradient` - stop lists and editable gradients
//! - `HarmonyKind` - colour-harmony rules and palette generation

mod colour;
mod gradient;
mod harmony;
mod hsl;
mod preset;
mod stop;

pub use colour::Colour;
pub use gradient::{label_colour, Gradient, MAX_STOPS, MIN_STOPS};
pub use harmony::{
    generate_palette, palette_from_colour, HarmonyKind, HarmonyOptions, DEFAULT_HUE_RANGE,
    DEFAULT_SATURATION_BOOST, HUE_RANGE, SATURATION_BOOST,
};
pub use hsl::{hex_to_hsl, hsl_to_hex, wrap_hue, Hsl};
pub use preset::{BuiltinPresets, Preset};
pub use stop::{parse_stops, sort_stops, sorted_stops, ColorStop};
