//! where the roster loader gets its keys from.

use keyward_types::KeyPair;

use crate::Result;

/// a source of fresh keypairs.
///
/// the roster loader asks for one keypair per user line. the default
/// source generates real ed25519 keys; tests can swap in something cheaper.
pub trait KeySource {
    /// produce a new keypair, labelled with `comment`.
    fn generate(&self, comment: &str) -> Result<KeyPair>;
}

/// the default source: random ed25519 keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519KeySource;

impl KeySource for Ed25519KeySource {
    fn generate(&self, comment: &str) -> Result<KeyPair> {
        crate::generate_keypair_with_comment(comment)
    }
}
