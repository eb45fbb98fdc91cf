//! keyward - ssh access resolution for a server fleet

use clap::Parser;
use color_eyre::eyre::Result;
use keyward::cli::{Cli, Command};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Rotate(cmd) => cmd.run(),
        Command::Access(cmd) => cmd.run(),
        Command::Keygen(cmd) => cmd.run(),
    }
}
