//! the `access` subcommand - show who may log in to one server

use clap::Args;
use color_eyre::eyre::{Result, bail};

use super::FileArgs;

/// show the users allowed on one server
#[derive(Args, Debug)]
pub struct AccessCommand {
    /// config and input file locations
    #[command(flatten)]
    pub files: FileArgs,

    /// server name as written in the inventory
    pub server: String,
}

impl AccessCommand {
    /// run the access command
    pub fn run(self) -> Result<()> {
        let engine = self.files.load_engine()?;

        let Some(server) = engine.config().server(&self.server) else {
            bail!("server '{}' is not in the inventory", self.server);
        };

        let users = engine.resolve(server);
        if users.is_empty() {
            println!("No users may log in to {} ({})", server.name, server.host);
            return Ok(());
        }

        println!("{} ({}):", server.name, server.host);
        for user in users {
            let fingerprint = keyward_keys::fingerprint(user.keys.public())?;
            println!("  {:<16} {}", user.name, fingerprint);
        }

        Ok(())
    }
}
