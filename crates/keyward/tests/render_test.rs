//! tests for rendering resolved access from real config files.

use std::fs;

use keyward::render::{AUTHORIZED_KEYS, ServerReport, write_authorized_keys};
use keyward_acl::{AccessEngine, load_config};
use tempfile::TempDir;

fn write_fleet(dir: &TempDir) {
    fs::write(
        dir.path().join("servers.txt"),
        "# fleet\nhost web1\nhostname 10.0.0.1\nhost web2\nhostname 10.0.0.2\nhost db1\nhostname 10.0.0.3\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("users.txt"),
        "alice: @infra, @oncall\nbob: @infra\ncarol: @dba\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("acl.txt"),
        "web1: bob, @infra\nweb2: @nosuchteam\ndb1: @dba, @oncall\n",
    )
    .unwrap();
}

fn engine(dir: &TempDir) -> AccessEngine {
    let loaded = load_config(
        &dir.path().join("servers.txt"),
        &dir.path().join("users.txt"),
        &dir.path().join("acl.txt"),
    )
    .unwrap();
    AccessEngine::new(loaded)
}

#[test]
fn test_authorized_keys_written_per_server() {
    let input = TempDir::new().unwrap();
    write_fleet(&input);
    let engine = engine(&input);
    let out = TempDir::new().unwrap();

    for access in engine.resolve_all() {
        write_authorized_keys(out.path(), access.server, &access.users).unwrap();
    }

    let roster = &engine.config().roster;
    let key_of = |name: &str| {
        let id = roster.user_id(name).unwrap();
        roster.user(id).unwrap().keys.authorized_key_line()
    };

    let web1 = fs::read_to_string(out.path().join("web1").join(AUTHORIZED_KEYS)).unwrap();
    assert_eq!(web1, format!("{}\n{}\n", key_of("bob"), key_of("alice")));

    let web2 = fs::read_to_string(out.path().join("web2").join(AUTHORIZED_KEYS)).unwrap();
    assert!(web2.is_empty());

    let db1 = fs::read_to_string(out.path().join("db1").join(AUTHORIZED_KEYS)).unwrap();
    assert_eq!(db1, format!("{}\n{}\n", key_of("carol"), key_of("alice")));
    for line in db1.lines() {
        assert!(line.starts_with("ssh-ed25519 "));
    }
}

#[test]
fn test_json_report() {
    let input = TempDir::new().unwrap();
    write_fleet(&input);
    let engine = engine(&input);

    let reports: Vec<ServerReport> = engine
        .resolve_all()
        .iter()
        .map(|access| ServerReport::new(access, &engine.config().roster).unwrap())
        .collect();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].server, "web1");
    assert_eq!(reports[0].host, "10.0.0.1");

    let alice = &reports[0].users[1];
    assert_eq!(alice.name, "alice");
    assert_eq!(alice.teams, vec!["infra", "oncall"]);
    assert!(alice.fingerprint.starts_with("SHA256:"));
    assert!(alice.public_key.ends_with(" alice"));

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[1]["server"], "web2");
    assert_eq!(json[1]["users"].as_array().unwrap().len(), 0);
    assert!(json.to_string().find("PRIVATE").is_none());
}
