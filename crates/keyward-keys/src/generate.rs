//! ed25519 keypair generation in openssh encodings.

use ed25519_consensus::SigningKey;
use keyward_types::KeyPair;
use ssh_key::private::{Ed25519Keypair, KeypairData};
use ssh_key::{HashAlg, LineEnding, PrivateKey, PublicKey};
use zeroize::Zeroizing;

use crate::{Error, Result};

/// length of an ed25519 seed in bytes.
pub const SEED_LEN: usize = 32;

/// generate a fresh ed25519 keypair with no comment.
///
/// returns `(public, private)` encoded as an openssh public key line and an
/// unencrypted openssh private key pem block.
pub fn generate_keypair() -> Result<KeyPair> {
    generate_keypair_with_comment("")
}

/// generate a fresh ed25519 keypair whose openssh comment is `comment`.
pub fn generate_keypair_with_comment(comment: &str) -> Result<KeyPair> {
    let seed: Zeroizing<[u8; SEED_LEN]> = Zeroizing::new(rand::random());
    encode_seed(&seed, comment)
}

/// encode the keypair derived from `seed`.
fn encode_seed(seed: &[u8; SEED_LEN], comment: &str) -> Result<KeyPair> {
    let verification = SigningKey::from(*seed).verification_key();
    let public: &[u8] = verification.as_ref();

    // openssh stores ed25519 private keys as seed || public
    let mut raw = Zeroizing::new([0u8; Ed25519Keypair::BYTE_SIZE]);
    raw[..SEED_LEN].copy_from_slice(seed);
    raw[SEED_LEN..].copy_from_slice(public);

    let keypair = Ed25519Keypair::from_bytes(&raw)?;
    let private = PrivateKey::new(KeypairData::Ed25519(keypair), comment)?;

    let private_pem = private.to_openssh(LineEnding::LF)?;
    let public_line = private.public_key().to_openssh()?;

    Ok(KeyPair::new(
        public_line.into_bytes(),
        private_pem.as_bytes().to_vec(),
    ))
}

/// sha256 fingerprint of an openssh public key, as printed by `ssh-keygen -l`.
pub fn fingerprint(public: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(public).map_err(|_| Error::InvalidPublicKey)?;
    let key = PublicKey::from_openssh(text.trim())?;
    Ok(key.fingerprint(HashAlg::Sha256).to_string())
}
