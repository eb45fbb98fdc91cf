//! test utilities for building rosters without generating real keys.

use crate::{KeyPair, Roster, User};

/// placeholder key material tagged with `comment`.
///
/// the bytes are not a valid key; use this only where the resolver or
/// renderer is under test, not the key generator.
pub fn test_keys(comment: &str) -> KeyPair {
    KeyPair::new(
        format!("ssh-ed25519 AAAAtest {}", comment).into_bytes(),
        format!("test-private-{}", comment).into_bytes(),
    )
}

/// builder for [`Roster`] fixtures.
///
/// # example
/// ```
/// use keyward_types::test_utils::TestRosterBuilder;
///
/// let roster = TestRosterBuilder::new()
///     .user("alice", &["infra", "oncall"])
///     .user("bob", &["infra"])
///     .build();
/// assert_eq!(roster.teams().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestRosterBuilder {
    users: Vec<(String, Vec<String>)>,
}

impl TestRosterBuilder {
    /// create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// add a user with the given team names.
    pub fn user(mut self, name: &str, teams: &[&str]) -> Self {
        self.users.push((
            name.to_string(),
            teams.iter().map(|t| t.to_string()).collect(),
        ));
        self
    }

    /// build the roster, creating teams in first-mention order.
    pub fn build(self) -> Roster {
        let mut roster = Roster::new();
        for (name, teams) in self.users {
            let mut user = User::new(name.clone(), test_keys(&name));
            for team in &teams {
                let id = roster.team_or_insert(team);
                user.join(id);
            }
            roster.push_user(user);
        }
        roster
    }
}
