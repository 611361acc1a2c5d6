mod catalogue;
mod cli;
mod commands;
mod errors;

use crate::errors::HazResult;
use clap::Parser;
use cli::Cli;
use console::style;
use std::time::Instant;
use tracing_subscriber::fmt::time;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

fn init_tracing() {
    // Diagnostics go to stderr; stdout belongs to the fixture itself
    // (prompt string, printf output) so harnesses can capture it untouched.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(time::UtcTime::rfc_3339());

    Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}

fn main() -> HazResult<()> {
    let now = Instant::now();
    init_tracing();

    tracing::debug!("fixture starting up");
    let cli = Cli::parse();

    commands::handle_command(cli)?;

    eprintln!(
        "{} in {:.3}s.",
        style("Finished").green().bold(),
        now.elapsed().as_secs_f32()
    );
    Ok(())
}
