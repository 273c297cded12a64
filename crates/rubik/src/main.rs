//! Headless driver for the cube simulator.
//!
//! Feeds move strings and simulated frame ticks into the simulation and prints
//! the resulting state as JSON.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    cli::exec(args)
}
