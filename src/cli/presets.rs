//! Presets command implementation.

use clap::Args;

use crate::code::{format_code, CodeFormat};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{label_colour, BuiltinPresets, Colour};

/// List the builtin gradient presets
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Snippet flavour printed for each preset
    #[arg(long, short, value_enum, default_value_t = CodeFormat::Css)]
    pub format: CodeFormat,
}

pub fn run(args: PresetsArgs, printer: &Printer) -> Result<()> {
    let presets = BuiltinPresets::all();
    printer.status("Listing", &plural(presets.len(), "preset", "presets"));

    for preset in &presets {
        let gradient = &preset.gradient;
        let label = if label_colour(&gradient.stops) == Colour::WHITE {
            "light text"
        } else {
            "dark text"
        };
        println!("{} ({})", preset.name, label);
        println!("  {}", format_code(args.format, &gradient.stops, gradient.angle)?);
    }

    Ok(())
}
