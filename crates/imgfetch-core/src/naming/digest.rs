//! Short content digest used for fallback filenames.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
const HASH_PREFIX_LEN: usize = 8;

/// SHA-256 of `content` as lowercase hex, truncated to the first 8 characters.
pub fn content_hash_prefix(content: &[u8]) -> String {
    let mut hex = hex::encode(Sha256::digest(content));
    hex.truncate(HASH_PREFIX_LEN);
    hex
}
