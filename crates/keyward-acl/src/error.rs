//! error types for keyward-acl.

use std::path::PathBuf;

use thiserror::Error;

/// errors that can occur while loading config files.
///
/// malformed lines and unknown references are not errors; they are skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// a required config file does not exist.
    #[error("config file not found: {}", path.display())]
    FileNotFound {
        /// the path that was looked up.
        path: PathBuf,
    },

    /// a config file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// the file being read.
        path: PathBuf,
        /// the underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// generating a user's keypair failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] keyward_keys::Error),
}

/// result type for keyward-acl operations.
pub type Result<T> = std::result::Result<T, Error>;
