pub mod code;
pub mod completions;
pub mod init;
pub mod linear;
pub mod palette;
pub mod presets;
pub mod random;
pub mod render;
pub mod source;

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{GradiaError, Result};

/// gradia - Colour-harmony palettes and painterly gradient backgrounds
#[derive(Parser, Debug)]
#[command(name = "gradia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate harmony colour stops from a base colour
    Palette(palette::PaletteArgs),

    /// Render an artistic (blob + noise) gradient to PNG
    Render(render::RenderArgs),

    /// Export a flat linear gradient to PNG
    Linear(linear::LinearArgs),

    /// Print CSS or Tailwind code for a gradient
    Code(code::CodeArgs),

    /// List the builtin gradient presets
    Presets(presets::PresetsArgs),

    /// Generate a random gradient
    Random(random::RandomArgs),

    /// Initialize a gradia project (generates gradia.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Create the parent directory of `path` if it does not exist yet.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| GradiaError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })
        }
        _ => Ok(()),
    }
}
