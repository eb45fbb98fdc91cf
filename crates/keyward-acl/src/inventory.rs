//! server inventory parser.
//!
//! the inventory is a subset of ssh_config:
//!
//! ```text
//! host web1
//! hostname 10.0.0.1
//! ```
//!
//! keys are case-insensitive and anything other than `host` and `hostname`
//! is ignored. A stanza only becomes a [`Server`] once it has both a name
//! and a hostname.

use std::path::Path;

use keyward_types::Server;
use tracing::{debug, trace};

use crate::Result;
use crate::line::{content_lines, read_file};

/// the stanza currently being read.
#[derive(Default)]
struct Stanza {
    name: String,
    host: String,
}

impl Stanza {
    fn flush_into(self, servers: &mut Vec<Server>) {
        if !self.name.is_empty() && !self.host.is_empty() {
            servers.push(Server::new(self.name, self.host));
        } else if !self.name.is_empty() {
            debug!("Dropping host {:?}: no hostname set", self.name);
        }
    }
}

/// parse an inventory from text.
pub fn parse_servers(text: &str) -> Vec<Server> {
    let mut servers = Vec::new();
    let mut current = Stanza::default();

    for (lineno, line) in content_lines(text) {
        let mut words = line.split_whitespace();
        let Some(key) = words.next() else {
            continue;
        };
        let value = words.collect::<Vec<_>>().join(" ");

        if key.eq_ignore_ascii_case("host") {
            std::mem::take(&mut current).flush_into(&mut servers);
            current.name = value;
        } else if key.eq_ignore_ascii_case("hostname") {
            current.host = value;
        } else {
            trace!("Ignoring inventory key {:?} on line {}", key, lineno);
        }
    }
    current.flush_into(&mut servers);

    servers
}

/// load an inventory file.
///
/// fails with [`Error::FileNotFound`](crate::Error::FileNotFound) before
/// reading if `path` is not an existing file.
pub fn load_servers(path: &Path) -> Result<Vec<Server>> {
    let text = read_file(path)?;
    let servers = parse_servers(&text);
    debug!("Loaded {} servers from {:?}", servers.len(), path);
    Ok(servers)
}
