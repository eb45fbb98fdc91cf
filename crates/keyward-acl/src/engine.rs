//! the access resolution engine.
//!
//! for a server, find its acl and expand it into the users allowed in:
//! - the first acl whose server name matches wins; later lines for the
//!   same server are never consulted
//! - no acl means no access
//! - users are listed once, in the order they were first granted

use std::collections::HashMap;
use std::sync::Arc;

use keyward_types::{AccessEntry, Acl, Roster, Server, User};

use crate::LoadedConfig;

/// users granted so far, keyed by name, in first-grant order.
#[derive(Default)]
struct Granted<'a> {
    order: Vec<&'a User>,
    by_name: HashMap<&'a str, usize>,
}

impl<'a> Granted<'a> {
    /// grant `user`. a user with the same name keeps its slot but the
    /// stored value is replaced.
    fn insert(&mut self, user: &'a User) {
        match self.by_name.get(user.name.as_str()) {
            Some(&slot) => self.order[slot] = user,
            None => {
                self.by_name.insert(&user.name, self.order.len());
                self.order.push(user);
            }
        }
    }

    fn into_users(self) -> Vec<&'a User> {
        self.order
    }
}

/// compute the users allowed on `server`.
///
/// pure: reads only its arguments.
pub fn resolve<'a>(server: &Server, acls: &[Acl], roster: &'a Roster) -> Vec<&'a User> {
    let Some(acl) = acls.iter().find(|acl| acl.server == server.name) else {
        return Vec::new();
    };

    let mut granted = Granted::default();
    for entry in &acl.access {
        match *entry {
            AccessEntry::User(id) => {
                if let Some(user) = roster.user(id) {
                    granted.insert(user);
                }
            }
            AccessEntry::Team(id) => {
                for user in roster.members(id) {
                    granted.insert(user);
                }
            }
        }
    }

    granted.into_users()
}

/// the users granted on one server.
#[derive(Debug, Clone)]
pub struct ServerAccess<'a> {
    /// the server.
    pub server: &'a Server,
    /// users allowed in, in grant order.
    pub users: Vec<&'a User>,
}

/// thread-safe resolution engine over one loaded config.
///
/// wraps the config in an arc for cheap cloning; every method takes
/// `&self`, so servers can be resolved from several threads at once.
#[derive(Debug, Clone)]
pub struct AccessEngine {
    config: Arc<LoadedConfig>,
}

impl AccessEngine {
    /// create an engine over a loaded config.
    pub fn new(config: LoadedConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// the config being resolved against.
    pub fn config(&self) -> &LoadedConfig {
        &self.config
    }

    /// users allowed on `server`.
    pub fn resolve(&self, server: &Server) -> Vec<&User> {
        resolve(server, &self.config.acls, &self.config.roster)
    }

    /// resolve every server in inventory order.
    pub fn resolve_all(&self) -> Vec<ServerAccess<'_>> {
        self.config
            .servers
            .iter()
            .map(|server| ServerAccess {
                server,
                users: self.resolve(server),
            })
            .collect()
    }
}
