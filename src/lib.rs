//! gradia - Colour-harmony palettes and painterly gradient backgrounds
//!
//! A library for deriving harmonious colour stops from a single base colour
//! and rasterising them as seeded "artistic" gradients or flat linear
//! gradients, plus the CSS/Tailwind snippets that go with them.

pub mod cli;
pub mod code;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use code::{format_code, linear_gradient, tailwind_direction, CodeFormat};
pub use error::{GradiaError, Result};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use render::{
    plan_blobs, random_seed, render_artistic_gradient, write_png, write_render_json,
    ArtisticRenderer, Blob, LinearRenderer, RenderMeta, RenderedGradient, SeededRng,
};
pub use types::{
    generate_palette, hex_to_hsl, hsl_to_hex, label_colour, palette_from_colour, parse_stops,
    sort_stops, BuiltinPresets, ColorStop, Colour, Gradient, HarmonyKind, HarmonyOptions, Hsl,
    Preset,
};
