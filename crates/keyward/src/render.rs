//! rendering of resolved access.
//!
//! `authorized_keys` files are written locally, one directory per server.
//! getting them onto the servers is someone else's job.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use keyward_acl::ServerAccess;
use keyward_types::{Roster, Server, User};
use serde::Serialize;

/// file name written inside each server directory.
pub const AUTHORIZED_KEYS: &str = "authorized_keys";

/// `authorized_keys` content for a set of users, one key per line.
pub fn authorized_keys(users: &[&User]) -> String {
    let mut out = String::new();
    for user in users {
        out.push_str(&user.keys.authorized_key_line());
        out.push('\n');
    }
    out
}

/// directory name for a server, if the name is safe to use as one.
fn server_dir_name(name: &str) -> Option<&str> {
    let unsafe_name =
        name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']);
    (!unsafe_name).then_some(name)
}

/// write `<dir>/<server>/authorized_keys` and return its path.
///
/// server names that can't be a single path component are rejected.
pub fn write_authorized_keys(dir: &Path, server: &Server, users: &[&User]) -> io::Result<PathBuf> {
    let name = server_dir_name(&server.name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("server name {:?} is not a valid directory name", server.name),
        )
    })?;

    let server_dir = dir.join(name);
    fs::create_dir_all(&server_dir)?;

    let path = server_dir.join(AUTHORIZED_KEYS);
    fs::write(&path, authorized_keys(users))?;
    Ok(path)
}

/// a granted user as shown in json output.
#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    /// username.
    pub name: String,
    /// team names.
    pub teams: Vec<String>,
    /// openssh public key line.
    pub public_key: String,
    /// sha256 fingerprint of the public key.
    pub fingerprint: String,
}

/// one server's access as shown in json output.
#[derive(Debug, Clone, Serialize)]
pub struct ServerReport {
    /// server name.
    pub server: String,
    /// server hostname.
    pub host: String,
    /// users allowed in, in grant order.
    pub users: Vec<UserReport>,
}

impl UserReport {
    /// describe `user`, looking up team names in `roster`.
    pub fn new(user: &User, roster: &Roster) -> keyward_keys::Result<Self> {
        Ok(Self {
            name: user.name.clone(),
            teams: roster
                .team_names(user)
                .into_iter()
                .map(str::to_string)
                .collect(),
            public_key: user.keys.authorized_key_line(),
            fingerprint: keyward_keys::fingerprint(user.keys.public())?,
        })
    }
}

impl ServerReport {
    /// describe one server's resolved access.
    pub fn new(access: &ServerAccess<'_>, roster: &Roster) -> keyward_keys::Result<Self> {
        let users = access
            .users
            .iter()
            .map(|user| UserReport::new(user, roster))
            .collect::<keyward_keys::Result<Vec<_>>>()?;
        Ok(Self {
            server: access.server.name.clone(),
            host: access.server.host.clone(),
            users,
        })
    }
}

/// plain-text listing of one server's granted users.
pub fn grant_listing(access: &ServerAccess<'_>) -> String {
    let mut out = format!("Granting access in {} to:\n", access.server.name);
    if access.users.is_empty() {
        out.push_str("  (nobody)\n");
    }
    for user in &access.users {
        out.push_str(&format!("  - {}\n", user.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyward_types::test_utils::TestRosterBuilder;
    use tempfile::TempDir;

    #[test]
    fn test_authorized_keys_one_line_per_user() {
        let roster = TestRosterBuilder::new()
            .user("alice", &[])
            .user("bob", &[])
            .build();
        let users: Vec<&User> = roster.users().iter().collect();

        let text = authorized_keys(&users);
        assert_eq!(
            text,
            "ssh-ed25519 AAAAtest alice\nssh-ed25519 AAAAtest bob\n"
        );
        assert_eq!(authorized_keys(&[]), "");
    }

    #[test]
    fn test_write_authorized_keys() {
        let roster = TestRosterBuilder::new().user("alice", &[]).build();
        let users: Vec<&User> = roster.users().iter().collect();
        let dir = TempDir::new().unwrap();

        let path = write_authorized_keys(dir.path(), &Server::new("web1", "h"), &users).unwrap();
        assert_eq!(path, dir.path().join("web1").join(AUTHORIZED_KEYS));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "ssh-ed25519 AAAAtest alice\n"
        );
    }

    #[test]
    fn test_write_rejects_path_like_server_names() {
        let dir = TempDir::new().unwrap();
        for name in ["", ".", "..", "../etc", "a/b"] {
            let err = write_authorized_keys(dir.path(), &Server::new(name, "h"), &[]).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "name {:?}", name);
        }
    }

    #[test]
    fn test_grant_listing() {
        let roster = TestRosterBuilder::new()
            .user("bob", &[])
            .user("alice", &[])
            .build();
        let server = Server::new("web1", "10.0.0.1");
        let access = ServerAccess {
            server: &server,
            users: roster.users().iter().collect(),
        };
        assert_eq!(
            grant_listing(&access),
            "Granting access in web1 to:\n  - bob\n  - alice\n"
        );

        let empty = ServerAccess {
            server: &server,
            users: vec![],
        };
        assert_eq!(
            grant_listing(&empty),
            "Granting access in web1 to:\n  (nobody)\n"
        );
    }
}
