//! load all three config files in one pass.

use std::path::Path;

use keyward_keys::{Ed25519KeySource, KeySource};
use keyward_types::{Acl, Roster, Server, Team, User};
use tracing::info;

use crate::{Result, load_acls, load_roster, load_servers};

/// everything read from one load of the config files.
///
/// nothing here changes after loading; the resolver only reads it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// servers in inventory order.
    pub servers: Vec<Server>,
    /// users and teams.
    pub roster: Roster,
    /// acl entries in file order.
    pub acls: Vec<Acl>,
}

impl LoadedConfig {
    /// all users in roster order.
    pub fn users(&self) -> &[User] {
        self.roster.users()
    }

    /// all teams in first-mention order.
    pub fn teams(&self) -> &[Team] {
        self.roster.teams()
    }

    /// find a server by name.
    pub fn server(&self, name: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.name == name)
    }
}

/// load servers, roster and acls, generating fresh ed25519 keys for every
/// user.
///
/// each file is checked before it is read, in that order, so a missing
/// inventory fails before any keys are generated.
pub fn load_config(servers_path: &Path, users_path: &Path, acl_path: &Path) -> Result<LoadedConfig> {
    load_config_with(servers_path, users_path, acl_path, &Ed25519KeySource)
}

/// like [`load_config`], with keys drawn from `keys`.
pub fn load_config_with(
    servers_path: &Path,
    users_path: &Path,
    acl_path: &Path,
    keys: &dyn KeySource,
) -> Result<LoadedConfig> {
    let servers = load_servers(servers_path)?;
    let roster = load_roster(users_path, keys)?;
    let acls = load_acls(acl_path, &roster)?;

    info!(
        "Loaded {} servers, {} users, {} teams, {} acl entries",
        servers.len(),
        roster.len(),
        roster.teams().len(),
        acls.len()
    );

    Ok(LoadedConfig {
        servers,
        roster,
        acls,
    })
}
