use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a 32-byte random secret, hex encoded.
///
/// The hex form (64 chars) is what lands in the invitation link.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex_encode(&bytes)
}

/// SHA-256 digest of a secret, hex encoded. This is the only form stored.
pub fn hash_secret(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    hex_encode(&digest)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
