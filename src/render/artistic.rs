//! Artistic gradient renderer.
//!
//! Paints a painterly background by layering 20-30 translucent radial blobs
//! over a flat base colour, then sprinkling monochrome noise over every pixel.
//! Everything random comes from one `SeededRng`, drawn in a fixed order: the
//! blob count, then each blob's colour index, x, y, radius and opacity, then
//! one noise value per pixel in row-major order. Given the same stops, size
//! and seed, the output is pixel-identical.

use image::{Rgba, RgbaImage};
use palette::{Mix, Srgb};

use crate::types::{ColorStop, Colour};

use super::rng::{random_seed, SeededRng};

/// Default canvas width.
pub const DEFAULT_WIDTH: u32 = 640;

/// Default canvas height.
pub const DEFAULT_HEIGHT: u32 = 400;

/// Default noise amplitude, as a fraction of the full channel range.
pub const DEFAULT_NOISE: f64 = 0.03;

/// One translucent radial blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub colour: Colour,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

/// Result of an artistic render: the image and the seed that produced it.
#[derive(Debug, Clone)]
pub struct RenderedGradient {
    /// Seed the render started from; reuse it to reproduce the image.
    pub seed: f64,
    image: RgbaImage,
}

impl RenderedGradient {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Renderer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtisticRenderer {
    noise: f64,
}

impl Default for ArtisticRenderer {
    fn default() -> Self {
        Self {
            noise: DEFAULT_NOISE,
        }
    }
}

impl ArtisticRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the noise amplitude (clamped to `[0, 1]`; 0 disables noise).
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = if noise.is_finite() {
            noise.clamp(0.0, 1.0)
        } else {
            DEFAULT_NOISE
        };
        self
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Render onto a fresh `width` x `height` canvas.
    ///
    /// With no seed, a random one is chosen and reported back in the result.
    /// Zero dimensions are raised to 1. An empty stop list leaves the canvas
    /// fully transparent.
    pub fn render(
        &self,
        stops: &[ColorStop],
        width: u32,
        height: u32,
        seed: Option<f64>,
    ) -> RenderedGradient {
        let seed = seed.unwrap_or_else(random_seed);
        let mut image = RgbaImage::new(width.max(1), height.max(1));
        let mut rng = SeededRng::new(seed);
        self.paint(stops, &mut rng, &mut image);
        RenderedGradient { seed, image }
    }

    /// Paint onto an existing canvas, drawing from `rng`.
    ///
    /// Does nothing when `stops` is empty.
    pub fn paint(&self, stops: &[ColorStop], rng: &mut SeededRng, canvas: &mut RgbaImage) {
        let Some(base) = stops.first() else {
            return;
        };

        fill(canvas, base.color);

        for blob in plan_blobs(stops, canvas.width(), canvas.height(), rng) {
            draw_blob(canvas, &blob);
        }

        if self.noise > 0.0 {
            add_noise(canvas, self.noise, rng);
        }
    }
}

/// Render with the default noise level.
pub fn render_artistic_gradient(
    stops: &[ColorStop],
    width: u32,
    height: u32,
    seed: Option<f64>,
) -> RenderedGradient {
    ArtisticRenderer::default().render(stops, width, height, seed)
}

/// Lay out the blobs for a canvas, advancing `rng`.
///
/// Returns no blobs for an empty stop list (and draws nothing from `rng`).
pub fn plan_blobs(stops: &[ColorStop], width: u32, height: u32, rng: &mut SeededRng) -> Vec<Blob> {
    if stops.is_empty() {
        return Vec::new();
    }

    let (w, h) = (width as f64, height as f64);
    let min_dim = w.min(h);
    let padding = min_dim * 0.1;

    let count = rng.range(20.0, 30.0).floor() as usize;

    (0..count)
        .map(|_| {
            let index = (rng.range(0.0, stops.len() as f64).floor() as usize).min(stops.len() - 1);
            let x = rng.range(padding, w - padding);
            let y = rng.range(padding, h - padding);
            let radius = rng.range(min_dim * 0.1, min_dim * 0.4);
            let opacity = rng.range(0.2, 0.8);

            Blob {
                colour: stops[index].color,
                x,
                y,
                radius,
                opacity,
            }
        })
        .collect()
}

fn fill(canvas: &mut RgbaImage, colour: Colour) {
    let rgba = Rgba(colour.to_rgba());
    for pixel in canvas.pixels_mut() {
        *pixel = rgba;
    }
}

/// Composite a radial gradient, solid at the centre and fully transparent at
/// the rim, with source-over blending at the blob's opacity.
fn draw_blob(canvas: &mut RgbaImage, blob: &Blob) {
    if blob.radius <= 0.0 {
        return;
    }

    let (width, height) = canvas.dimensions();
    let x0 = (blob.x - blob.radius).floor().max(0.0) as u32;
    let y0 = (blob.y - blob.radius).floor().max(0.0) as u32;
    let x1 = ((blob.x + blob.radius).ceil().max(0.0) as u32).min(width);
    let y1 = ((blob.y + blob.radius).ceil().max(0.0) as u32).min(height);

    let source = to_srgb(blob.colour);

    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f64 + 0.5 - blob.x;
            let dy = py as f64 + 0.5 - blob.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance >= blob.radius {
                continue;
            }

            let alpha = blob.opacity * (1.0 - distance / blob.radius);
            let pixel = canvas.get_pixel_mut(px, py);
            let dest = Srgb::new(
                pixel[0] as f32 / 255.0,
                pixel[1] as f32 / 255.0,
                pixel[2] as f32 / 255.0,
            );
            let blended = dest.mix(source, alpha as f32);
            *pixel = Rgba([
                to_channel(blended.red as f64),
                to_channel(blended.green as f64),
                to_channel(blended.blue as f64),
                pixel[3],
            ]);
        }
    }
}

/// Add the same signed offset to R, G and B of every pixel, row-major.
fn add_noise(canvas: &mut RgbaImage, amplitude: f64, rng: &mut SeededRng) {
    for pixel in canvas.pixels_mut() {
        let noise = (rng.next_f64() - 0.5) * amplitude * 255.0;
        for channel in 0..3 {
            let value = pixel[channel] as f64 + noise;
            // Round half to even, matching clamped 8-bit canvas storage.
            pixel[channel] = value.round_ties_even().clamp(0.0, 255.0) as u8;
        }
    }
}

fn to_srgb(colour: Colour) -> Srgb<f32> {
    Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    )
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
