//! configuration types for keyward

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// main configuration for keyward.
///
/// every field has a default, so a config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// path to the server inventory.
    pub servers_file: PathBuf,

    /// path to the user/team roster.
    pub users_file: PathBuf,

    /// path to the per-server acl file.
    pub acl_file: PathBuf,

    /// log level: trace, debug, info, warn or error.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            servers_file: PathBuf::from("./servers.txt"),
            users_file: PathBuf::from("./users.txt"),
            acl_file: PathBuf::from("./acl.txt"),
            log_level: "warn".to_string(),
        }
    }
}
