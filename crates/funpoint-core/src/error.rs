//! Error types for FunPoint Core

use thiserror::Error;

/// Merchant configuration errors
///
/// These are startup-time failures: operating with an empty secret would
/// produce a predictable, forgeable checksum, so construction fails fast
/// instead. Verification failure is never an error - [`verify`] returns a
/// plain `bool`.
///
/// [`verify`]: https://docs.rs/funpoint-mac
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HashKey must not be empty")]
    EmptyHashKey,

    #[error("HashIV must not be empty")]
    EmptyHashIv,
}
