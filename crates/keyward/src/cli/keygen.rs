//! the `keygen` subcommand - print a fresh keypair

use std::io::Write;

use clap::Args;
use color_eyre::eyre::{Context, Result};

/// print a fresh ed25519 keypair
#[derive(Args, Debug)]
pub struct KeygenCommand {
    /// comment stored with the key (usually the username)
    #[arg(long, default_value = "")]
    pub comment: String,
}

impl KeygenCommand {
    /// run the keygen command
    pub fn run(self) -> Result<()> {
        let keys = keyward_keys::generate_keypair_with_comment(&self.comment)
            .context("failed to generate keypair")?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", keys.authorized_key_line())?;
        stdout.write_all(keys.private())?;
        stdout.flush()?;

        Ok(())
    }
}
