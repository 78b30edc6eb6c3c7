use clap::Parser;
use miette::Result;
use gradia::cli::{Cli, Commands};
use gradia::manifest::Manifest;
use gradia::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    let cwd = std::env::current_dir().map_err(gradia::GradiaError::from)?;
    let manifest = Manifest::discover(&cwd)?;

    match cli.command {
        Commands::Palette(args) => gradia::cli::palette::run(args, &manifest, &printer)?,
        Commands::Render(args) => gradia::cli::render::run(args, &manifest, &printer)?,
        Commands::Linear(args) => gradia::cli::linear::run(args, &manifest, &printer)?,
        Commands::Code(args) => gradia::cli::code::run(args, &manifest, &printer)?,
        Commands::Presets(args) => gradia::cli::presets::run(args, &printer)?,
        Commands::Random(args) => gradia::cli::random::run(args, &printer)?,
        Commands::Init(args) => gradia::cli::init::run(args, &printer)?,
        Commands::Completions(args) => gradia::cli::completions::run(args)?,
    }

    Ok(())
}
