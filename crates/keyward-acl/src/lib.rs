//! access resolution for keyward.
//!
//! this crate turns the three flat config files (server inventory, user
//! roster, acl) into typed entities and computes, per server, the
//! deduplicated list of users allowed in. Parsing is best-effort: lines
//! that don't fit a format are skipped, and acl references to unknown users
//! or teams are dropped. Only a missing file or a key generation failure is
//! an error.

#![warn(missing_docs)]

pub mod acl_file;
pub mod engine;
pub mod error;
pub mod inventory;
mod line;
pub mod loader;
pub mod roster;

pub use acl_file::{load_acls, parse_acls};
pub use engine::{AccessEngine, ServerAccess, resolve};
pub use error::{Error, Result};
pub use inventory::{load_servers, parse_servers};
pub use loader::{LoadedConfig, load_config, load_config_with};
pub use roster::{load_roster, parse_roster};
