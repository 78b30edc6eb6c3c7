//! Built-in gradient presets.

use super::{ColorStop, Colour, Gradient};

/// A named gradient shipped with gradia.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub gradient: Gradient,
}

/// Collection of builtin presets.
pub struct BuiltinPresets;

impl BuiltinPresets {
    /// Every builtin preset, in display order.
    pub fn all() -> Vec<Preset> {
        vec![
            preset("Purple to Teal", 90.0, &[(0x9b87f5, 0.0), (0x4eb3af, 100.0)]),
            preset(
                "Sunset",
                45.0,
                &[(0xff9a8b, 0.0), (0xff6a88, 60.0), (0xff99ac, 100.0)],
            ),
            preset(
                "Deep Ocean",
                180.0,
                &[(0x0f2027, 0.0), (0x203a43, 50.0), (0x2c5364, 100.0)],
            ),
            preset("Northern Lights", 135.0, &[(0x4facfe, 0.0), (0x00f2fe, 100.0)]),
            preset("Tropical Summer", 90.0, &[(0xff9a9e, 0.0), (0xfad0c4, 100.0)]),
            preset("Lime and Mint", 60.0, &[(0xa8ff78, 0.0), (0x78ffd6, 100.0)]),
        ]
    }

    /// Look up a preset by name (case-insensitive, `-` matches a space).
    pub fn get(name: &str) -> Option<Preset> {
        let wanted = normalise(name);
        Self::all().into_iter().find(|p| normalise(p.name) == wanted)
    }
}

fn normalise(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', " ")
}

fn preset(name: &'static str, angle: f64, stops: &[(u32, f64)]) -> Preset {
    let stops = stops
        .iter()
        .map(|&(rgb, position)| {
            let colour = Colour::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8);
            ColorStop::new(colour, position)
        })
        .collect();

    Preset {
        name,
        gradient: Gradient { stops, angle },
    }
}
