//! Linear export command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};
use crate::render::{write_png, LinearRenderer, EXPORT_HEIGHT, EXPORT_WIDTH};

use super::ensure_parent_dir;
use super::source::StopsArgs;

/// Export a flat linear gradient to PNG
#[derive(Args, Debug)]
pub struct LinearArgs {
    #[command(flatten)]
    pub source: StopsArgs,

    /// Gradient angle in degrees (CSS convention, 90 = left to right)
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Image width in pixels
    #[arg(long, default_value_t = EXPORT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = EXPORT_HEIGHT)]
    pub height: u32,

    /// Output PNG path (default: <manifest output>/<name>-linear.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: LinearArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let resolved = args.source.resolve(manifest)?;
    let angle = args.angle.or(resolved.angle).unwrap_or(manifest.angle);
    let renderer = LinearRenderer::new(angle);

    printer.status(
        "Rendering",
        &format!(
            "{} at {}deg ({}x{})",
            resolved.label,
            renderer.angle(),
            args.width,
            args.height
        ),
    );

    let image = renderer.render(&resolved.stops, args.width, args.height);

    let path = args
        .output
        .unwrap_or_else(|| manifest.output.join(format!("{}-linear.png", resolved.slug())));
    ensure_parent_dir(&path)?;
    write_png(&image, &path)?;
    printer.status("Wrote", &printer.cyan(&display_path(&path)));

    Ok(())
}
