//! core types for keyward - ssh access resolution for a server fleet.
//!
//! this crate provides the entities shared by the parser, resolver and cli:
//! - [`server`]: a server from the inventory
//! - [`roster`]: the user/team arena built from the roster file
//! - [`acl`]: per-server access rules
//! - [`keys`]: generated ssh key material
//! - [`config`]: application configuration

#![warn(missing_docs)]

mod acl;
mod config;
mod keys;
mod roster;
mod server;
pub mod test_utils;

pub use acl::{AccessEntry, Acl};
pub use config::Config;
pub use keys::KeyPair;
pub use roster::{Roster, Team, TeamId, User, UserId};
pub use server::Server;
