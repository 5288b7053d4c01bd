// src/bin/cli.rs
use defcon_courses::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
