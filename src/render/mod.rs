//! Rendering module for gradia.
//!
//! This module rasterises colour stops: the seeded artistic renderer, the
//! flat linear exporter, and PNG/metadata output.

mod artistic;
mod linear;
mod png;
mod rng;

pub use artistic::{
    plan_blobs, render_artistic_gradient, ArtisticRenderer, Blob, RenderedGradient,
    DEFAULT_HEIGHT, DEFAULT_NOISE, DEFAULT_WIDTH,
};
pub use linear::{LinearRenderer, EXPORT_HEIGHT, EXPORT_WIDTH};
pub use png::{write_png, write_render_json, RenderMeta};
pub use rng::{random_seed, SeededRng};
