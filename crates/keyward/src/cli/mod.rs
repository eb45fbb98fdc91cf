//! cli subcommands for keyward.
//!
//! - `keyward rotate` - generate keys and list granted users for every server
//! - `keyward access <server>` - list granted users for one server
//! - `keyward keygen` - print a fresh ed25519 keypair

mod access;
mod files;
mod keygen;
mod rotate;

pub use access::AccessCommand;
pub use files::FileArgs;
pub use keygen::KeygenCommand;
pub use rotate::{OutputFormat, RotateCommand};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// keyward - ssh access resolution for a server fleet
#[derive(Parser, Debug)]
#[command(name = "keyward")]
#[command(about = "Compute SSH access for a server fleet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// generate keys and authorized users for every server
    Rotate(RotateCommand),

    /// show the users allowed on one server
    Access(AccessCommand),

    /// print a fresh ed25519 keypair
    Keygen(KeygenCommand),
}

/// map a log level name to a tracing level. unknown names fall back to warn.
pub fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// install the global tracing subscriber, logging to stderr.
pub fn init_logging(level: &str) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_log_level(level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
