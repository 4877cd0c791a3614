//! Opaque identifier and token generation

use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes behind every identifier (16 hex characters)
const ID_BYTES: usize = 8;

/// Generate `<prefix>-<16 lowercase hex chars>` from the OS random source.
///
/// Uniqueness is not checked here; a collision surfaces as an
/// `AlreadyExists` error from the store.
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    format!("{}-{}", prefix, hex::encode(bytes))
}
