//! SHA-256 hashing for CheckMacValue

use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Hash raw bytes with SHA-256
///
/// Returns a 64-character uppercase hex string, the wire form of a
/// checksum token.
///
/// # Example
///
/// ```rust
/// use funpoint_mac::hash_bytes;
///
/// let hash = hash_bytes(b"hello");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, hash.to_uppercase());
/// ```
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();

    hex_encode_upper(&result)
}

/// Hash a string with SHA-256
///
/// The string is treated as UTF-8 bytes.
pub fn hash_string(s: &str) -> String {
    hash_bytes(s.as_bytes())
}

/// Case-insensitive, constant-time checksum comparison
///
/// The gateway may echo the token in either case, so both sides are
/// ASCII-case-folded before the constant-time byte comparison.
///
/// # Example
///
/// ```rust
/// use funpoint_mac::mac_equal;
///
/// assert!(mac_equal("ABCD", "abcd"));
/// assert!(!mac_equal("ABCD", "abce"));
/// ```
pub fn mac_equal(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x.to_ascii_uppercase() ^ y.to_ascii_uppercase();
    }
    result == 0
}

/// Validate a checksum token's format
///
/// Returns `true` for a 64-character hex string in either case.
pub fn is_valid_mac(mac: &str) -> bool {
    mac.len() == 64 && mac.chars().all(|c| c.is_ascii_hexdigit())
}

/// Convert bytes to uppercase hex string
fn hex_encode_upper(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02X}", byte).expect("writing to a String cannot fail");
    }
    hex
}
