//! Code command implementation.

use clap::Args;

use crate::code::{format_code, CodeFormat};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::Printer;

use super::source::StopsArgs;

/// Print CSS or Tailwind code for a gradient
#[derive(Args, Debug)]
pub struct CodeArgs {
    #[command(flatten)]
    pub source: StopsArgs,

    /// Snippet flavour
    #[arg(long, short, value_enum, default_value_t = CodeFormat::Css)]
    pub format: CodeFormat,

    /// Gradient angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,
}

pub fn run(args: CodeArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let resolved = args.source.resolve(manifest)?;
    let angle = args.angle.or(resolved.angle).unwrap_or(manifest.angle);

    let code = format_code(args.format, &resolved.stops, angle)?;
    printer.info("Formatted", &format!("{} as {}", resolved.label, args.format));
    println!("{}", code);

    Ok(())
}
