//! config file arguments shared by the subcommands.

use std::path::{Path, PathBuf};

use clap::Args;
use color_eyre::eyre::{Context, Result};
use keyward_acl::{AccessEngine, load_config};
use keyward_types::Config;
use tracing::{debug, info};

use super::init_logging;

/// default config file search paths (in order of priority).
const CONFIG_SEARCH_PATHS: &[&str] = &["~/.config/keyward/config.toml", "./keyward.toml"];

/// where to find the server inventory, roster and acl.
#[derive(Args, Debug, Clone, Default)]
pub struct FileArgs {
    /// path to config file (toml format)
    #[arg(short, long, env = "KEYWARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// path to the server inventory [default: ./servers.txt]
    #[arg(long, env = "KEYWARD_SERVERS_FILE")]
    pub servers_file: Option<PathBuf>,

    /// path to the user/team roster [default: ./users.txt]
    #[arg(long, env = "KEYWARD_USERS_FILE")]
    pub users_file: Option<PathBuf>,

    /// path to the acl file [default: ./acl.txt]
    #[arg(long, env = "KEYWARD_ACL_FILE")]
    pub acl_file: Option<PathBuf>,

    /// log level (trace, debug, info, warn, error)
    #[arg(long, env = "KEYWARD_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// read and parse one toml config file.
fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config file: {:?}", path))
}

/// first search path that exists.
fn find_config_file() -> Option<PathBuf> {
    CONFIG_SEARCH_PATHS
        .iter()
        .map(|raw| {
            expand_tilde::expand_tilde(raw)
                .map(|p| p.into_owned())
                .unwrap_or_else(|_| PathBuf::from(raw))
        })
        .find(|path| path.is_file())
}

impl FileArgs {
    /// the config file to use, if any.
    ///
    /// an explicit `--config` must exist. otherwise the search paths are
    /// tried and finding nothing just means defaults.
    fn load_config_file(&self) -> Result<Option<Config>> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => match find_config_file() {
                Some(path) => {
                    debug!("Found config file at {:?}", path);
                    path
                }
                None => return Ok(None),
            },
        };
        read_config(&path).map(Some)
    }

    /// merge defaults, config file and flags.
    ///
    /// priority order: defaults -> config file -> cli flags / env
    pub fn into_config(self) -> Result<Config> {
        let mut config = self.load_config_file()?.unwrap_or_default();

        if let Some(path) = self.servers_file {
            config.servers_file = path;
        }
        if let Some(path) = self.users_file {
            config.users_file = path;
        }
        if let Some(path) = self.acl_file {
            config.acl_file = path;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        Ok(config)
    }

    /// set up logging, load all three files and build the access engine.
    pub fn load_engine(self) -> Result<AccessEngine> {
        let config = self.into_config()?;
        init_logging(&config.log_level)?;

        info!(
            "Loading servers from {:?}, users from {:?}, acls from {:?}",
            config.servers_file, config.users_file, config.acl_file
        );
        let loaded = load_config(&config.servers_file, &config.users_file, &config.acl_file)
            .context("failed to load configuration")?;

        Ok(AccessEngine::new(loaded))
    }
}
