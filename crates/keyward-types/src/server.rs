//! server entries from the inventory file.

use serde::{Deserialize, Serialize};

/// a server that may be granted access to.
///
/// identity is the `name`; `host` is whatever the inventory gave as
/// `hostname` (a dns name or an ip address).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Server {
    /// stanza name from the `host` line.
    pub name: String,
    /// value of the `hostname` line.
    pub host: String,
}

impl Server {
    /// create a new server.
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
        }
    }
}

impl std::fmt::Display for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.host)
    }
}
