//! # FunPoint Core
//!
//! Core types for the FunPoint AIO checkout MAC scheme.
//!
//! This crate provides:
//! - [`ParameterSet`] - the flat name/value parameter map signed and verified
//!   by the MAC scheme
//! - [`SecretPair`] - the merchant's shared `HashKey`/`HashIV` secrets
//! - Typed checkout orders and callback notification views
//!
//! ## Example
//!
//! ```rust
//! use funpoint_core::{ParameterSet, SecretPair};
//!
//! let secrets = SecretPair::new("265fIDjIvesceXWM", "pOOvhGd1V2pJbjfX").unwrap();
//!
//! let mut params = ParameterSet::new();
//! params.insert("MerchantID", "1000031");
//! params.insert("TotalAmount", "100");
//! ```

pub mod error;
pub mod params;
pub mod secret;
pub mod trade;

// Re-exports for convenience
pub use error::ConfigError;
pub use params::{ParameterSet, CHECK_MAC_VALUE};
pub use secret::SecretPair;
pub use trade::{CheckoutOrder, ChoosePayment, PeriodSettings, PeriodType, TradeNotification};
