//! access rules for a single server.

use crate::{TeamId, UserId};

/// one entry of an acl access list.
///
/// entries point into the [`Roster`](crate::Roster) arena they were
/// resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessEntry {
    /// a single user, granted directly.
    User(UserId),
    /// every member of a team.
    Team(TeamId),
}

/// the rule set of one acl line.
///
/// `server` is the name as written in the acl file and is not checked
/// against the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acl {
    /// server name this rule set applies to.
    pub server: String,
    /// users and teams granted access, in file order.
    pub access: Vec<AccessEntry>,
}

impl Acl {
    /// create an acl with an empty access list.
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            access: Vec::new(),
        }
    }

    /// true if no user or team survived resolution.
    pub fn is_empty(&self) -> bool {
        self.access.is_empty()
    }
}
