//! acl file parser.
//!
//! one rule set per line, keyed by server name:
//!
//! ```text
//! web1: bob, @infra
//! ```
//!
//! `@name` refers to a team, a bare name to a user. Names that don't exist
//! in the roster are dropped. Repeated server lines each become their own
//! [`Acl`]; they are not merged.

use std::path::Path;

use keyward_types::{AccessEntry, Acl, Roster};
use tracing::{debug, trace};

use crate::Result;
use crate::line::{content_lines, read_file, split_entry};

/// resolve one access item against the roster.
fn resolve_item(item: &str, roster: &Roster) -> Option<AccessEntry> {
    if item.starts_with('@') {
        roster
            .team_id(item.trim_start_matches('@'))
            .map(AccessEntry::Team)
    } else {
        roster.user_id(item).map(AccessEntry::User)
    }
}

/// parse acls from text against an already loaded roster.
pub fn parse_acls(text: &str, roster: &Roster) -> Vec<Acl> {
    let mut acls = Vec::new();

    for (lineno, line) in content_lines(text) {
        let Some((server, items)) = split_entry(line) else {
            trace!("Skipping acl line {}: no ':'", lineno);
            continue;
        };

        let mut acl = Acl::new(server);
        for item in items {
            match resolve_item(item, roster) {
                Some(entry) => acl.access.push(entry),
                None => debug!("Dropping unknown acl entry {:?} for {:?}", item, server),
            }
        }
        acls.push(acl);
    }

    acls
}

/// load an acl file.
pub fn load_acls(path: &Path, roster: &Roster) -> Result<Vec<Acl>> {
    let text = read_file(path)?;
    let acls = parse_acls(&text, roster);
    debug!("Loaded {} acl entries from {:?}", acls.len(), path);
    Ok(acls)
}
