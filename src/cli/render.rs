//! Render command implementation.
//!
//! Paints an artistic gradient to PNG and writes a JSON sidecar recording the
//! seed, size, noise and stops so the image can be reproduced later.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};
use crate::render::{write_png, write_render_json, ArtisticRenderer, RenderMeta};

use super::ensure_parent_dir;
use super::source::{slugify, StopsArgs};

/// Render an artistic (blob + noise) gradient to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: StopsArgs,

    /// Seed for the blob layout and noise (random if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<f64>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Noise amplitude, 0-1 (0 disables noise)
    #[arg(long)]
    pub noise: Option<f64>,

    /// Re-render from a JSON sidecar written by a previous render
    #[arg(
        long,
        conflicts_with_all = ["base", "stops", "preset", "seed", "width", "height", "noise"]
    )]
    pub replay: Option<PathBuf>,

    /// Output PNG path (default: <manifest output>/<name>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip writing the JSON sidecar
    #[arg(long)]
    pub no_meta: bool,
}

pub fn run(args: RenderArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let (meta, name) = match &args.replay {
        Some(path) => {
            let meta = RenderMeta::load(path)?;
            printer.info("Replaying", &display_path(path));
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("gradient")
                .to_string();
            (meta, name)
        }
        None => {
            let resolved = args.source.resolve(manifest)?;
            let renderer = ArtisticRenderer::new().with_noise(args.noise.unwrap_or(manifest.noise));
            let meta = RenderMeta {
                seed: args.seed.unwrap_or_else(crate::render::random_seed),
                width: args.width.unwrap_or(manifest.width).max(1),
                height: args.height.unwrap_or(manifest.height).max(1),
                noise: renderer.noise(),
                stops: resolved.stops,
            };
            printer.status(
                "Rendering",
                &format!("{} ({}x{})", resolved.label, meta.width, meta.height),
            );
            (meta, slugify(&resolved.label))
        }
    };

    if meta.stops.is_empty() {
        printer.warning("Skipping", "no colour stops to paint");
        return Ok(());
    }

    let rendered = ArtisticRenderer::new().with_noise(meta.noise).render(
        &meta.stops,
        meta.width,
        meta.height,
        Some(meta.seed),
    );

    let png_path = args
        .output
        .clone()
        .unwrap_or_else(|| manifest.output.join(format!("{}.png", name)));
    ensure_parent_dir(&png_path)?;
    write_png(rendered.image(), &png_path)?;
    printer.status("Wrote", &printer.cyan(&display_path(&png_path)));

    if !args.no_meta {
        let json_path = png_path.with_extension("json");
        write_render_json(&meta, &json_path)?;
        printer.status("Wrote", &printer.cyan(&display_path(&json_path)));
    }

    printer.info("Seed", &printer.dim(&rendered.seed.to_string()));
    Ok(())
}
