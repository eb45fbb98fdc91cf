//! error types for key generation.

use thiserror::Error;

/// errors that can occur while producing or inspecting key material.
#[derive(Debug, Error)]
pub enum Error {
    /// openssh encoding or decoding failed
    #[error("openssh encoding error: {0}")]
    Encoding(#[from] ssh_key::Error),

    /// public key bytes are not utf-8 text
    #[error("public key is not valid utf-8")]
    InvalidPublicKey,
}
