//! Shared arguments for choosing the colour stops a command works on.
//!
//! Stops come from exactly one of: a base colour run through a harmony rule,
//! an explicit `--stops` list, or a builtin `--preset`.

use clap::Args;

use crate::error::{GradiaError, Result};
use crate::manifest::Manifest;
use crate::types::{
    palette_from_colour, parse_stops, BuiltinPresets, ColorStop, Colour, HarmonyKind,
    HarmonyOptions,
};

#[derive(Args, Debug, Default, Clone)]
pub struct StopsArgs {
    /// Base colour for harmony generation (#rrggbb)
    #[arg(conflicts_with_all = ["stops", "preset"])]
    pub base: Option<String>,

    /// Harmony rule applied to the base colour
    #[arg(long, value_enum)]
    pub harmony: Option<HarmonyKind>,

    /// Hue spread for analogous harmonies, 10-90 degrees
    #[arg(long)]
    pub hue_range: Option<u32>,

    /// Saturation boost, 40-120 (80 keeps the base saturation)
    #[arg(long)]
    pub saturation: Option<u32>,

    /// Explicit stops, e.g. "#ff0000:0,#0000ff:100"
    #[arg(long, conflicts_with = "preset")]
    pub stops: Option<String>,

    /// Use a builtin preset by name (see `gradia presets`)
    #[arg(long)]
    pub preset: Option<String>,
}

/// Stops chosen by `StopsArgs`, plus a label for status output and file names.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStops {
    pub stops: Vec<ColorStop>,
    pub label: String,
    /// Angle carried by a preset, if any.
    pub angle: Option<f64>,
}

impl ResolvedStops {
    /// A filesystem-friendly version of the label.
    pub fn slug(&self) -> String {
        slugify(&self.label)
    }
}

/// Lowercase ASCII alphanumerics with single dashes between words.
pub fn slugify(label: &str) -> String {
    let mut slug = String::new();
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "gradient".to_string()
    } else {
        slug.to_string()
    }
}

impl StopsArgs {
    /// Harmony settings: flags first, then the manifest.
    pub fn harmony_options(&self, manifest: &Manifest) -> HarmonyOptions {
        let defaults = manifest.harmony_options();
        HarmonyOptions {
            harmony: self.harmony.unwrap_or(defaults.harmony),
            hue_range: self.hue_range.unwrap_or(defaults.hue_range),
            saturation_boost: self.saturation.unwrap_or(defaults.saturation_boost),
        }
        .clamped()
    }

    pub fn resolve(&self, manifest: &Manifest) -> Result<ResolvedStops> {
        if let Some(name) = &self.preset {
            let preset = BuiltinPresets::get(name).ok_or_else(|| GradiaError::Validation {
                message: format!("Unknown preset: {}", name),
                help: Some("Run `gradia presets` to list them".to_string()),
            })?;
            return Ok(ResolvedStops {
                stops: preset.gradient.stops,
                label: preset.name.to_string(),
                angle: Some(preset.gradient.angle),
            });
        }

        if let Some(list) = &self.stops {
            let stops = parse_stops(list)?;
            if stops.is_empty() {
                return Err(GradiaError::Validation {
                    message: "No colour stops given".to_string(),
                    help: Some("Write stops as \"#ff0000:0,#0000ff:100\"".to_string()),
                });
            }
            return Ok(ResolvedStops {
                stops,
                label: "custom".to_string(),
                angle: None,
            });
        }

        if let Some(base) = &self.base {
            let colour = Colour::from_hex(base)?;
            let options = self.harmony_options(manifest);
            return Ok(ResolvedStops {
                stops: palette_from_colour(colour, options),
                label: format!("{} {}", options.harmony, colour),
                angle: None,
            });
        }

        Err(GradiaError::Validation {
            message: "No colours to work with".to_string(),
            help: Some("Pass a base colour like #9b87f5, --stops, or --preset".to_string()),
        })
    }
}
