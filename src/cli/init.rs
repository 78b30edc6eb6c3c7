//! Init command implementation.
//!
//! Writes a `gradia.yaml` manifest holding the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GradiaError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Initialize a gradia project by generating a gradia.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing gradia.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(GradiaError::Validation {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| GradiaError::Io {
            path: args.path.clone(),
            message: format!("Failed to create project directory: {}", e),
        })?;
    }

    let yaml = Manifest::default().to_yaml()?;
    fs::write(&manifest_path, yaml).map_err(|e| GradiaError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &printer.cyan(&display_path(&manifest_path)));
    Ok(())
}
