//! PNG and metadata output for rendered gradients.

use std::fs;
use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{GradiaError, Result};
use crate::types::ColorStop;

/// Everything needed to reproduce an artistic render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderMeta {
    pub seed: f64,
    pub width: u32,
    pub height: u32,
    pub noise: f64,
    pub stops: Vec<ColorStop>,
}

impl RenderMeta {
    /// Load render metadata from a JSON sidecar.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GradiaError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read render metadata: {}", e),
        })?;

        serde_json::from_str(&content).map_err(|e| GradiaError::Parse {
            message: format!("Invalid render metadata in {}: {}", path.display(), e),
            help: Some("Sidecars are written by `gradia render`".to_string()),
        })
    }
}

/// Write an image to a PNG file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| GradiaError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Write render metadata as pretty-printed JSON.
pub fn write_render_json(meta: &RenderMeta, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(meta).map_err(|e| GradiaError::Render {
        message: format!("Failed to serialize render metadata: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| GradiaError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write render metadata: {}", e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::random_seed;
    use crate::types::Colour;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_round_trip() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_png(&img, &path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (2, 1));
        assert_eq!(back.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(back.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_write_png_bad_directory() {
        let img = RgbaImage::new(1, 1);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(matches!(write_png(&img, &path), Err(GradiaError::Io { .. })));
    }

    #[test]
    fn test_render_json_round_trip() {
        let meta = RenderMeta {
            seed: 0.123_456_789_012_345_6,
            width: 640,
            height: 400,
            noise: 0.03,
            stops: vec![
                ColorStop::new(Colour::rgb(0x9b, 0x87, 0xf5), 0.0),
                ColorStop::new(Colour::rgb(0x4e, 0xb3, 0xaf), 100.0),
            ],
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_render_json(&meta, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["stops"][0]["color"], "#9b87f5");
        assert_eq!(parsed["stops"][1]["position"], 100.0);

        // The seed must survive exactly or replays drift
        assert_eq!(RenderMeta::load(&path).unwrap(), meta);
    }

    #[test]
    fn test_render_json_keeps_random_seeds_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.json");

        for _ in 0..2000 {
            let meta = RenderMeta {
                seed: random_seed(),
                width: 1,
                height: 1,
                noise: 0.03,
                stops: Vec::new(),
            };
            let json = serde_json::to_string(&meta).unwrap();
            let back: RenderMeta = serde_json::from_str(&json).unwrap();
            assert_eq!(back.seed.to_bits(), meta.seed.to_bits(), "{}", json);
        }

        // Long mantissa that the fast float parser reads 1 ulp off
        let meta = RenderMeta {
            seed: 0.020876863925658462,
            width: 640,
            height: 400,
            noise: 0.03,
            stops: Vec::new(),
        };
        write_render_json(&meta, &path).unwrap();
        let loaded = RenderMeta::load(&path).unwrap();
        assert_eq!(loaded.seed.to_bits(), meta.seed.to_bits());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"seed\": \"nope\"}").unwrap();
        assert!(matches!(RenderMeta::load(&path), Err(GradiaError::Parse { .. })));
    }
}
