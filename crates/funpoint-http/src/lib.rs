//! # FunPoint HTTP Transport
//!
//! Thin axum shell around the CheckMacValue scheme.
//!
//! This crate provides:
//! - An extractor that decodes the gateway's form-encoded callback body
//!   into a [`funpoint_core::ParameterSet`]
//! - The two literal acknowledgement bodies the gateway contract fixes
//! - Auto-submitting checkout form rendering for the outbound path
//!
//! ## Callback handler example
//!
//! ```ignore
//! use axum::{extract::State, routing::post, Router};
//! use funpoint_core::SecretPair;
//! use funpoint_http::{CallbackAck, CallbackForm};
//! use std::sync::Arc;
//!
//! async fn notify(
//!     State(secrets): State<Arc<SecretPair>>,
//!     CallbackForm(params): CallbackForm,
//! ) -> CallbackAck {
//!     CallbackAck::from_verified(funpoint_mac::verify(&params, &secrets))
//! }
//!
//! let app: Router<Arc<SecretPair>> = Router::new().route("/notify", post(notify));
//! ```

mod checkout;
mod error;
mod extractors;
mod response;

pub use checkout::render_checkout_form;
pub use error::HttpError;
pub use extractors::CallbackForm;
pub use response::{CallbackAck, ACK_MAC_ERROR, ACK_OK};
