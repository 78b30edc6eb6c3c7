//! Project manifest (gradia.yaml) parsing.
//!
//! The manifest holds per-project defaults for the CLI: where renders go, the
//! canvas size, noise level, and the harmony sliders. Command-line flags
//! override anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GradiaError, Result};
use crate::render::{DEFAULT_HEIGHT, DEFAULT_NOISE, DEFAULT_WIDTH};
use crate::types::{HarmonyKind, HarmonyOptions, DEFAULT_HUE_RANGE, DEFAULT_SATURATION_BOOST};

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "gradia.yaml";

/// Project manifest loaded from gradia.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for rendered images.
    pub output: PathBuf,

    /// Default canvas width for artistic renders.
    pub width: u32,

    /// Default canvas height for artistic renders.
    pub height: u32,

    /// Noise amplitude (0 disables the noise pass).
    pub noise: f64,

    /// Default harmony rule.
    pub harmony: HarmonyKind,

    /// Analogous hue spread in degrees.
    pub hue_range: u32,

    /// Saturation boost (80 = unchanged).
    pub saturation: u32,

    /// Default angle for linear gradients and code snippets.
    pub angle: f64,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            noise: DEFAULT_NOISE,
            harmony: HarmonyKind::default(),
            hue_range: DEFAULT_HUE_RANGE,
            saturation: DEFAULT_SATURATION_BOOST,
            angle: 90.0,
        }
    }
}

impl Manifest {
    /// Load manifest from a gradia.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GradiaError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `gradia.yaml` from `dir` if present, otherwise defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| GradiaError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GradiaError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Harmony sliders from the manifest, clamped to their ranges.
    pub fn harmony_options(&self) -> HarmonyOptions {
        HarmonyOptions {
            harmony: self.harmony,
            hue_range: self.hue_range,
            saturation_boost: self.saturation,
        }
        .clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: backgrounds").unwrap();

        assert_eq!(manifest.output, PathBuf::from("backgrounds"));
        assert_eq!(manifest.width, 640);
        assert_eq!(manifest.harmony, HarmonyKind::Shades);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: dist/backgrounds
width: 1280
height: 720
noise: 0.05
harmony: split-complementary
hue_range: 45
saturation: 100
angle: 135
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(
            manifest,
            Manifest {
                output: PathBuf::from("dist/backgrounds"),
                width: 1280,
                height: 720,
                noise: 0.05,
                harmony: HarmonyKind::SplitComplementary,
                hue_range: 45,
                saturation: 100,
                angle: 135.0,
            }
        );
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_harmony() {
        let err = Manifest::parse("harmony: pentadic").unwrap_err();
        assert!(matches!(err, GradiaError::Parse { .. }));
    }

    #[test]
    fn test_yaml_round_trip() {
        let manifest = Manifest {
            harmony: HarmonyKind::Triadic,
            ..Default::default()
        };
        let yaml = manifest.to_yaml().unwrap();
        assert!(yaml.contains("harmony: triadic"));
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }

    #[test]
    fn test_harmony_options_clamped() {
        let manifest = Manifest {
            hue_range: 5,
            saturation: 200,
            ..Default::default()
        };
        let options = manifest.harmony_options();
        assert_eq!(options.hue_range, 10);
        assert_eq!(options.saturation_boost, 120);
    }

    #[test]
    fn test_discover_missing_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Manifest::discover(dir.path()).unwrap(), Manifest::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILENAME), "width: 320\n").unwrap();
        assert_eq!(Manifest::discover(dir.path()).unwrap().width, 320);
    }
}
