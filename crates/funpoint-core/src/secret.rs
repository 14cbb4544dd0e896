//! Merchant secret material

use crate::error::ConfigError;
use std::fmt;

/// The merchant's shared `HashKey`/`HashIV` secret strings.
///
/// Both parties of the scheme hold the same pair; compromise of either
/// member invalidates every signature issued under it. The pair is
/// immutable for the process lifetime and passed explicitly to every
/// sign/verify call - there is no process-wide global, so multi-merchant
/// setups simply hold one `SecretPair` per merchant.
///
/// Construction fails fast on empty members: an empty secret would make
/// every checksum trivially forgeable, so it is a configuration error,
/// not a runtime condition.
///
/// # Example
///
/// ```rust
/// use funpoint_core::SecretPair;
///
/// let secrets = SecretPair::new("265fIDjIvesceXWM", "pOOvhGd1V2pJbjfX").unwrap();
/// assert_eq!(secrets.hash_key(), "265fIDjIvesceXWM");
///
/// assert!(SecretPair::new("", "iv").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretPair {
    hash_key: String,
    hash_iv: String,
}

impl SecretPair {
    /// Create a secret pair, rejecting empty members
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHashKey`] or [`ConfigError::EmptyHashIv`]
    /// if the corresponding member is empty.
    pub fn new(
        hash_key: impl Into<String>,
        hash_iv: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let hash_key = hash_key.into();
        let hash_iv = hash_iv.into();

        if hash_key.is_empty() {
            return Err(ConfigError::EmptyHashKey);
        }
        if hash_iv.is_empty() {
            return Err(ConfigError::EmptyHashIv);
        }

        Ok(Self { hash_key, hash_iv })
    }

    /// The `HashKey` member
    pub fn hash_key(&self) -> &str {
        &self.hash_key
    }

    /// The `HashIV` member
    pub fn hash_iv(&self) -> &str {
        &self.hash_iv
    }
}

// Secrets must not leak through debug logs.
impl fmt::Debug for SecretPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretPair")
            .field("hash_key", &"<redacted>")
            .field("hash_iv", &"<redacted>")
            .finish()
    }
}
