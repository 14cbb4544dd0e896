//! # FunPoint MAC
//!
//! CheckMacValue computation and verification for the FunPoint AIO
//! checkout protocol.
//!
//! This crate provides:
//! - Canonical string serialization of a parameter set
//! - SHA-256 hashing to the uppercase hex checksum token
//! - Signing and verification of parameter sets
//!
//! ## Canonicalization rules
//!
//! 1. The reserved `CheckMacValue` entry is removed
//! 2. Keys sorted case-insensitively, original case kept in the output
//! 3. Entries joined as `key=value` with `&`, framed by
//!    `HashKey=...&` and `&HashIV=...`
//! 4. The whole string percent-encoded (strict: everything outside
//!    `A-Za-z0-9-_.~`), then lower-cased
//! 5. A fixed table of escapes is restored to literal characters,
//!    reproducing the legacy encoder the remote verifier runs on
//!
//! ## Example
//!
//! ```rust
//! use funpoint_core::{ParameterSet, SecretPair, CHECK_MAC_VALUE};
//! use funpoint_mac::{sign, verify};
//!
//! let secrets = SecretPair::new("265fIDjIvesceXWM", "pOOvhGd1V2pJbjfX").unwrap();
//! let mut params: ParameterSet = [
//!     ("MerchantID", "1000031"),
//!     ("MerchantTradeNo", "T1"),
//!     ("TotalAmount", "100"),
//! ].into_iter().collect();
//!
//! let mac = sign(&params, &secrets);
//! assert_eq!(mac.len(), 64);
//!
//! params.insert(CHECK_MAC_VALUE, mac);
//! assert!(verify(&params, &secrets));
//! ```
//!
//! All operations are pure and thread-safe: no shared state, no I/O,
//! no failure modes beyond the caller supplying the wrong secrets.

mod canonical;
mod hash;
mod mac;

pub use canonical::*;
pub use hash::*;
pub use mac::*;
