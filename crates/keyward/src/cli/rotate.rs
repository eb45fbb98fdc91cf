//! the `rotate` subcommand - generate keys and resolve access for every server

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::info;

use super::FileArgs;
use crate::render::{ServerReport, grant_listing, write_authorized_keys};

/// output format for resolved access.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// human-readable listing
    #[default]
    Table,
    /// json array, one object per server
    Json,
}

/// generate keys and authorized users for every server
#[derive(Args, Debug)]
pub struct RotateCommand {
    /// config and input file locations
    #[command(flatten)]
    pub files: FileArgs,

    /// output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// write <dir>/<server>/authorized_keys for every server
    #[arg(long)]
    pub authorized_keys_dir: Option<PathBuf>,
}

impl RotateCommand {
    /// run the rotate command
    pub fn run(self) -> Result<()> {
        let engine = self.files.load_engine()?;
        let all = engine.resolve_all();

        if let Some(dir) = &self.authorized_keys_dir {
            for access in &all {
                let path = write_authorized_keys(dir, access.server, &access.users)
                    .with_context(|| {
                        format!("failed to write authorized_keys for {}", access.server.name)
                    })?;
                info!("Wrote {} keys to {:?}", access.users.len(), path);
            }
        }

        match self.output {
            OutputFormat::Json => {
                let reports = all
                    .iter()
                    .map(|access| ServerReport::new(access, &engine.config().roster))
                    .collect::<keyward_keys::Result<Vec<_>>>()
                    .context("failed to describe generated keys")?;
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
            OutputFormat::Table => {
                for access in &all {
                    println!("Generating authorized_keys for: {}", access.server.name);
                    print!("{}", grant_listing(access));
                }
            }
        }

        Ok(())
    }
}
