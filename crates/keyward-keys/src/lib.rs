//! ed25519 key generation for keyward.
//!
//! every user gets a fresh keypair each time the roster is loaded. keys are
//! encoded the way openssh expects them:
//! - public key as a single `ssh-ed25519 AAAA... comment` line
//! - private key as an unencrypted `OPENSSH PRIVATE KEY` pem block
//!
//! nothing here touches the filesystem.

pub mod error;
pub mod generate;
pub mod source;

pub use error::Error;
pub use generate::{fingerprint, generate_keypair, generate_keypair_with_comment};
pub use source::{Ed25519KeySource, KeySource};

/// result type for key operations.
pub type Result<T> = std::result::Result<T, Error>;
