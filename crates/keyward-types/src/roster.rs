//! users and teams loaded from the roster file.
//!
//! users and teams live in an arena owned by [`Roster`] and refer to each
//! other by index, so a user's team list never owns the teams it names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::KeyPair;

/// index of a team inside its [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub usize);

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// index of a user inside its [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub usize);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a named group of users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    /// team name, without the `@` sigil.
    pub name: String,
}

/// a user from the roster, with freshly generated key material.
#[derive(Debug, Clone)]
pub struct User {
    /// username as written in the roster.
    pub name: String,

    /// teams this user belongs to, in first-mention order, without repeats.
    teams: Vec<TeamId>,

    /// keypair generated when the roster was loaded.
    pub keys: KeyPair,
}

impl User {
    /// create a user with no team memberships.
    pub fn new(name: impl Into<String>, keys: KeyPair) -> Self {
        Self {
            name: name.into(),
            teams: Vec::new(),
            keys,
        }
    }

    /// add a team membership. adding the same team twice is a no-op.
    pub fn join(&mut self, team: TeamId) {
        if !self.teams.contains(&team) {
            self.teams.push(team);
        }
    }

    /// team memberships in first-mention order.
    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    /// true if this user is a member of `team`.
    pub fn is_member(&self, team: TeamId) -> bool {
        self.teams.contains(&team)
    }
}

/// the full set of users and teams from one roster load.
///
/// teams are canonical by name: [`Roster::team_or_insert`] hands back the
/// same [`TeamId`] for every mention of a name.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    users: Vec<User>,
    teams: Vec<Team>,
    team_index: HashMap<String, TeamId>,
    user_index: HashMap<String, UserId>,
}

impl Roster {
    /// create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// look up a team by name, creating it on first mention.
    pub fn team_or_insert(&mut self, name: &str) -> TeamId {
        if let Some(id) = self.team_index.get(name) {
            return *id;
        }
        let id = TeamId(self.teams.len());
        self.teams.push(Team {
            name: name.to_string(),
        });
        self.team_index.insert(name.to_string(), id);
        id
    }

    /// append a user.
    ///
    /// repeated usernames are kept as separate entries; name lookups
    /// resolve to the most recently added one.
    pub fn push_user(&mut self, user: User) -> UserId {
        let id = UserId(self.users.len());
        self.user_index.insert(user.name.clone(), id);
        self.users.push(user);
        id
    }

    /// all users in roster order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// all teams in first-mention order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// get a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id.0)
    }

    /// get a team by id.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    /// find a team by exact name.
    pub fn team_id(&self, name: &str) -> Option<TeamId> {
        self.team_index.get(name).copied()
    }

    /// find a user by exact name (last roster line wins).
    pub fn user_id(&self, name: &str) -> Option<UserId> {
        self.user_index.get(name).copied()
    }

    /// every user that belongs to `team`, in roster order.
    pub fn members(&self, team: TeamId) -> impl Iterator<Item = &User> {
        self.users.iter().filter(move |u| u.is_member(team))
    }

    /// names of the teams a user belongs to.
    pub fn team_names<'a>(&'a self, user: &User) -> Vec<&'a str> {
        user.teams()
            .iter()
            .filter_map(|id| self.team(*id))
            .map(|t| t.name.as_str())
            .collect()
    }

    /// number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// true if the roster holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_keys;

    #[test]
    fn test_team_or_insert_is_canonical() {
        let mut roster = Roster::new();
        let a = roster.team_or_insert("infra");
        let b = roster.team_or_insert("oncall");
        let c = roster.team_or_insert("infra");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(roster.teams().len(), 2);
        assert_eq!(roster.team_id("infra"), Some(a));
        assert_eq!(roster.team_id("nope"), None);
    }

    #[test]
    fn test_user_join_dedupes() {
        let mut roster = Roster::new();
        let infra = roster.team_or_insert("infra");
        let mut user = User::new("alice", test_keys("alice"));
        user.join(infra);
        user.join(infra);
        assert_eq!(user.teams(), &[infra]);
        assert!(user.is_member(infra));
    }

    #[test]
    fn test_user_lookup_last_wins() {
        let mut roster = Roster::new();
        let first = roster.push_user(User::new("alice", test_keys("alice-1")));
        let second = roster.push_user(User::new("alice", test_keys("alice-2")));

        assert_ne!(first, second);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.user_id("alice"), Some(second));
        assert_eq!(roster.user_id("bob"), None);
    }

    #[test]
    fn test_members_in_roster_order() {
        let mut roster = Roster::new();
        let infra = roster.team_or_insert("infra");
        let oncall = roster.team_or_insert("oncall");

        let mut carol = User::new("carol", test_keys("carol"));
        carol.join(infra);
        let mut alice = User::new("alice", test_keys("alice"));
        alice.join(oncall);
        alice.join(infra);
        roster.push_user(carol);
        roster.push_user(alice);
        roster.push_user(User::new("bob", test_keys("bob")));

        let names: Vec<&str> = roster.members(infra).map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["carol", "alice"]);

        let alice = roster.user(UserId(1)).unwrap();
        assert_eq!(roster.team_names(alice), vec!["oncall", "infra"]);
    }
}
