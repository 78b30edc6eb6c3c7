//! Random gradient command implementation.

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::code::{format_code, CodeFormat};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Gradient;

/// Generate a random gradient
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Seed for repeatable output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Snippet flavour
    #[arg(long, short, value_enum, default_value_t = CodeFormat::Css)]
    pub format: CodeFormat,
}

pub fn run(args: RandomArgs, printer: &Printer) -> Result<()> {
    let gradient = match args.seed {
        Some(seed) => Gradient::random(&mut StdRng::seed_from_u64(seed)),
        None => Gradient::random(&mut rand::rng()),
    };

    printer.status(
        "Generated",
        &format!(
            "{} at {}deg",
            plural(gradient.stops.len(), "stop", "stops"),
            gradient.angle
        ),
    );

    for stop in &gradient.stops {
        println!("{}", stop);
    }
    println!("{}", format_code(args.format, &gradient.stops, gradient.angle)?);

    Ok(())
}
