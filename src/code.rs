//! CSS and Tailwind code generation for linear gradients.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GradiaError, Result};
use crate::types::{sorted_stops, ColorStop, MIN_STOPS};

/// Snippet flavour.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CodeFormat {
    /// A `background: linear-gradient(...)` declaration
    #[default]
    Css,
    /// Tailwind `bg-gradient-*` utility classes
    Tailwind,
    /// Gradient-filled text, as CSS and Tailwind
    Text,
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeFormat::Css => write!(f, "css"),
            CodeFormat::Tailwind => write!(f, "tailwind"),
            CodeFormat::Text => write!(f, "text"),
        }
    }
}

/// Format `stops` (sorted by position first) as a code snippet.
pub fn format_code(format: CodeFormat, stops: &[ColorStop], angle: f64) -> Result<String> {
    if stops.len() < MIN_STOPS {
        return Err(GradiaError::Validation {
            message: format!(
                "Gradient code needs at least {} stops, got {}",
                MIN_STOPS,
                stops.len()
            ),
            help: Some("Add another colour stop".to_string()),
        });
    }

    let sorted = sorted_stops(stops);
    Ok(match format {
        CodeFormat::Css => format!("background: {};", linear_gradient(&sorted, angle)),
        CodeFormat::Tailwind => tailwind_classes(&sorted, angle),
        CodeFormat::Text => text_gradient(&sorted, angle),
    })
}

/// `linear-gradient(90deg, #aaaaaa 0%, #bbbbbb 100%)`
pub fn linear_gradient(sorted: &[ColorStop], angle: f64) -> String {
    let stops: Vec<String> = sorted.iter().map(ToString::to_string).collect();
    format!("linear-gradient({}deg, {})", angle, stops.join(", "))
}

/// Tailwind direction utility for a CSS angle.
pub fn tailwind_direction(angle: f64) -> &'static str {
    let angle = angle.rem_euclid(360.0);
    if (45.0..135.0).contains(&angle) {
        "to-b"
    } else if (135.0..225.0).contains(&angle) {
        "to-l"
    } else if (225.0..315.0).contains(&angle) {
        "to-t"
    } else {
        "to-r"
    }
}

fn tailwind_classes(sorted: &[ColorStop], angle: f64) -> String {
    let first = &sorted[0];
    let last = &sorted[sorted.len() - 1];
    let via = if sorted.len() > 2 {
        format!("via-[{}] ", sorted[1].color)
    } else {
        String::new()
    };

    format!(
        "bg-gradient-{} from-[{}] {}to-[{}]",
        tailwind_direction(angle),
        first.color,
        via,
        last.color
    )
}

fn text_gradient(sorted: &[ColorStop], angle: f64) -> String {
    let gradient = linear_gradient(sorted, angle);
    format!(
        "/* CSS */\n\
         background: {gradient};\n\
         -webkit-background-clip: text;\n\
         -webkit-text-fill-color: transparent;\n\
         \n\
         /* Tailwind */\n\
         bg-clip-text text-transparent bg-[image:{gradient}]\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use insta::assert_snapshot;

    fn stop(hex: &str, position: f64) -> ColorStop {
        ColorStop::new(Colour::from_hex(hex).unwrap(), position)
    }

    fn sunset() -> Vec<ColorStop> {
        vec![
            stop("#ff99ac", 100.0),
            stop("#ff9a8b", 0.0),
            stop("#ff6a88", 60.0),
        ]
    }

    #[test]
    fn test_css() {
        let code = format_code(CodeFormat::Css, &sunset(), 45.0).unwrap();
        assert_snapshot!(code, @"background: linear-gradient(45deg, #ff9a8b 0%, #ff6a88 60%, #ff99ac 100%);");
    }

    #[test]
    fn test_css_fractional_position() {
        let stops = vec![stop("#000000", 0.0), stop("#ffffff", 33.5)];
        let code = format_code(CodeFormat::Css, &stops, 90.0).unwrap();
        assert_eq!(
            code,
            "background: linear-gradient(90deg, #000000 0%, #ffffff 33.5%);"
        );
    }

    #[test]
    fn test_tailwind_with_via() {
        let code = format_code(CodeFormat::Tailwind, &sunset(), 90.0).unwrap();
        assert_snapshot!(code, @"bg-gradient-to-b from-[#ff9a8b] via-[#ff6a88] to-[#ff99ac]");
    }

    #[test]
    fn test_tailwind_two_stops() {
        let stops = vec![stop("#9b87f5", 0.0), stop("#4eb3af", 100.0)];
        let code = format_code(CodeFormat::Tailwind, &stops, 0.0).unwrap();
        assert_eq!(code, "bg-gradient-to-r from-[#9b87f5] to-[#4eb3af]");
    }

    #[test]
    fn test_tailwind_directions() {
        assert_eq!(tailwind_direction(0.0), "to-r");
        assert_eq!(tailwind_direction(44.9), "to-r");
        assert_eq!(tailwind_direction(45.0), "to-b");
        assert_eq!(tailwind_direction(135.0), "to-l");
        assert_eq!(tailwind_direction(225.0), "to-t");
        assert_eq!(tailwind_direction(315.0), "to-r");
        assert_eq!(tailwind_direction(-90.0), "to-t");
    }

    #[test]
    fn test_text_gradient() {
        let stops = vec![stop("#4facfe", 0.0), stop("#00f2fe", 100.0)];
        let code = format_code(CodeFormat::Text, &stops, 135.0).unwrap();
        assert_eq!(
            code,
            "/* CSS */\n\
             background: linear-gradient(135deg, #4facfe 0%, #00f2fe 100%);\n\
             -webkit-background-clip: text;\n\
             -webkit-text-fill-color: transparent;\n\
             \n\
             /* Tailwind */\n\
             bg-clip-text text-transparent bg-[image:linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)]\n"
        );
    }

    #[test]
    fn test_needs_two_stops() {
        let err = format_code(CodeFormat::Css, &[stop("#000000", 0.0)], 90.0).unwrap_err();
        assert!(matches!(err, GradiaError::Validation { .. }));
    }
}
