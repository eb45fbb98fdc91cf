//! user/team roster parser.
//!
//! one user per line:
//!
//! ```text
//! alice: @infra, @oncall
//! bob: infra
//! ```
//!
//! every item after the colon is a team name; the `@` sigil is optional
//! here. Teams are shared by name across the whole file.

use std::path::Path;

use keyward_keys::KeySource;
use keyward_types::{Roster, User};
use tracing::{debug, trace};

use crate::Result;
use crate::line::{content_lines, read_file, split_entry};

/// parse a roster from text, generating one keypair per user line.
///
/// lines without a colon are skipped. A key generation failure aborts
/// the parse.
pub fn parse_roster(text: &str, keys: &dyn KeySource) -> Result<Roster> {
    let mut roster = Roster::new();

    for (lineno, line) in content_lines(text) {
        let Some((name, items)) = split_entry(line) else {
            trace!("Skipping roster line {}: no ':'", lineno);
            continue;
        };

        let mut user = User::new(name, keys.generate(name)?);
        for item in items {
            let team = item.trim_start_matches('@');
            if team.is_empty() {
                continue;
            }
            let id = roster.team_or_insert(team);
            user.join(id);
        }
        roster.push_user(user);
    }

    Ok(roster)
}

/// load a roster file.
pub fn load_roster(path: &Path, keys: &dyn KeySource) -> Result<Roster> {
    let text = read_file(path)?;
    let roster = parse_roster(&text, keys)?;
    debug!(
        "Loaded {} users in {} teams from {:?}",
        roster.len(),
        roster.teams().len(),
        path
    );
    Ok(roster)
}
