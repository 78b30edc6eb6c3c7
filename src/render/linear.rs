//! Flat linear-gradient rasteriser for PNG export.
//!
//! Follows CSS `linear-gradient` geometry: 0° points up, 90° points right,
//! and the gradient line is long enough that the corners land exactly on the
//! 0% and 100% stops.

use image::{Rgba, RgbaImage};
use palette::{Mix, Srgb};

use crate::types::{sorted_stops, ColorStop, Colour};

/// Default export width.
pub const EXPORT_WIDTH: u32 = 1200;

/// Default export height.
pub const EXPORT_HEIGHT: u32 = 630;

/// Linear gradient renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRenderer {
    angle: f64,
}

impl Default for LinearRenderer {
    fn default() -> Self {
        Self { angle: 90.0 }
    }
}

impl LinearRenderer {
    /// Create a renderer for the given CSS angle in degrees.
    pub fn new(angle: f64) -> Self {
        Self {
            angle: if angle.is_finite() {
                angle.rem_euclid(360.0)
            } else {
                90.0
            },
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Render onto a fresh canvas. Empty stops give a transparent image.
    pub fn render(&self, stops: &[ColorStop], width: u32, height: u32) -> RgbaImage {
        let mut image = RgbaImage::new(width.max(1), height.max(1));
        self.paint(stops, &mut image);
        image
    }

    /// Paint onto an existing canvas; does nothing when `stops` is empty.
    pub fn paint(&self, stops: &[ColorStop], canvas: &mut RgbaImage) {
        if stops.is_empty() {
            return;
        }

        let stops = sorted_stops(stops);
        let (width, height) = canvas.dimensions();
        let (w, h) = (width as f64, height as f64);

        let radians = self.angle.to_radians();
        let (dir_x, dir_y) = (radians.sin(), -radians.cos());
        let length = (w * dir_x).abs() + (h * dir_y).abs();

        for (px, py, pixel) in canvas.enumerate_pixels_mut() {
            let dx = px as f64 + 0.5 - w / 2.0;
            let dy = py as f64 + 0.5 - h / 2.0;
            let t = if length > 0.0 {
                (dx * dir_x + dy * dir_y) / length + 0.5
            } else {
                0.0
            };
            *pixel = Rgba(colour_at(&stops, t * 100.0));
        }
    }
}

/// Sample sorted stops at `position` (percent), interpolating in sRGB.
fn colour_at(stops: &[ColorStop], position: f64) -> [u8; 4] {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return [0, 0, 0, 0],
    };

    if position <= first.position {
        return first.color.to_rgba();
    }
    if position >= last.position {
        return last.color.to_rgba();
    }

    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if position >= a.position && position < b.position {
            let span = b.position - a.position;
            let factor = ((position - a.position) / span) as f32;
            let mixed = to_srgb(a.color).mix(to_srgb(b.color), factor);
            return [
                to_channel(mixed.red),
                to_channel(mixed.green),
                to_channel(mixed.blue),
                255,
            ];
        }
    }

    last.color.to_rgba()
}

fn to_srgb(colour: Colour) -> Srgb<f32> {
    Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    )
}

fn to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
