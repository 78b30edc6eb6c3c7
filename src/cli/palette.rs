//! Palette command implementation.
//!
//! Prints the stops for a harmony, one per line, or as JSON.

use std::io::{self, IsTerminal};

use clap::Args;

use crate::error::{GradiaError, Result};
use crate::manifest::Manifest;
use crate::output::{plural, Printer};

use super::source::StopsArgs;

/// Generate harmony colour stops from a base colour
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub source: StopsArgs,

    /// Print stops as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let resolved = args.source.resolve(manifest)?;

    printer.status(
        "Generated",
        &format!(
            "{} ({})",
            plural(resolved.stops.len(), "stop", "stops"),
            resolved.label
        ),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&resolved.stops).map_err(|e| {
            GradiaError::Render {
                message: format!("Failed to serialize stops: {}", e),
                help: None,
            }
        })?;
        println!("{}", json);
        return Ok(());
    }

    let swatches = io::stdout().is_terminal();
    for stop in &resolved.stops {
        let swatch = if swatches {
            printer.swatch(stop.color)
        } else {
            String::new()
        };
        println!("{}{}", swatch, stop);
    }

    Ok(())
}
