//! Acknowledgement bodies for gateway callbacks

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Literal body acknowledging a verified notification.
pub const ACK_OK: &str = "1|OK";

/// Literal body rejecting a notification whose checksum did not verify.
pub const ACK_MAC_ERROR: &str = "0|CheckMacValue Error";

/// Acknowledgement returned to the gateway after a callback
///
/// The gateway branches on the body prefix (`1|` accepts, `0|` rejects and
/// retries); both variants go out as HTTP 200 `text/plain`. The two bodies
/// are part of the interoperability contract and must not be altered.
///
/// # Example
///
/// ```rust
/// use funpoint_http::{CallbackAck, ACK_OK};
///
/// let ack = CallbackAck::from_verified(true);
/// assert_eq!(ack.body(), ACK_OK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAck {
    /// Notification accepted
    Ok,
    /// Checksum verification failed
    MacError,
}

impl CallbackAck {
    /// Map a verification outcome to the matching acknowledgement
    pub fn from_verified(verified: bool) -> Self {
        if verified {
            CallbackAck::Ok
        } else {
            CallbackAck::MacError
        }
    }

    /// The literal response body
    pub fn body(&self) -> &'static str {
        match self {
            CallbackAck::Ok => ACK_OK,
            CallbackAck::MacError => ACK_MAC_ERROR,
        }
    }
}

impl IntoResponse for CallbackAck {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.body()).into_response()
    }
}
