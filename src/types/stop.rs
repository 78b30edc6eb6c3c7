//! Colour stops.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradiaError, Result};

use super::Colour;

/// One anchor point of a gradient: a colour at a percentage along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Colour,
    /// Position along the gradient axis, `[0, 100]`.
    pub position: f64,
}

impl ColorStop {
    pub fn new(color: Colour, position: f64) -> Self {
        Self {
            color,
            position: position.clamp(0.0, 100.0),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.position)
    }
}

impl FromStr for ColorStop {
    type Err = GradiaError;

    /// Parse `#rrggbb:pos` (position may carry a trailing `%`).
    fn from_str(s: &str) -> Result<Self> {
        let (colour, position) = s.trim().split_once(':').ok_or_else(|| GradiaError::Parse {
            message: format!("Missing position in colour stop: {}", s),
            help: Some("Write stops as #rrggbb:50".to_string()),
        })?;

        let colour = Colour::from_hex(colour)?;
        let position = parse_position(position)?;
        Ok(Self::new(colour, position))
    }
}

fn parse_position(s: &str) -> Result<f64> {
    let trimmed = s.trim().trim_end_matches('%');
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| GradiaError::Parse {
            message: format!("Invalid stop position: {}", s),
            help: Some("Positions are numbers from 0 to 100".to_string()),
        })
}

/// Parse a comma-separated stop list such as `#ff0000:0,#0000ff:100`.
///
/// Entries without a position are spread evenly by index.
pub fn parse_stops(input: &str) -> Result<Vec<ColorStop>> {
    let entries: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect();

    let last = entries.len().saturating_sub(1).max(1) as f64;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if entry.contains(':') {
                entry.parse()
            } else {
                let colour = Colour::from_hex(entry)?;
                Ok(ColorStop::new(colour, i as f64 * 100.0 / last))
            }
        })
        .collect()
}

/// Sort stops ascending by position. Ties keep their original order.
pub fn sort_stops(stops: &mut [ColorStop]) {
    stops.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(Ordering::Equal)
    });
}

/// A sorted copy of `stops`.
pub fn sorted_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted = stops.to_vec();
    sort_stops(&mut sorted);
    sorted
}
