//! Axum extractors for gateway callbacks

use crate::error::HttpError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Form;
use funpoint_core::ParameterSet;

/// Axum extractor for the gateway's form-encoded callback body
///
/// Decodes the POST body into a [`ParameterSet`], preserving the original
/// casing of every value. Decoding failures are transport errors and map
/// to 400; MAC verification is the handler's job.
///
/// # Example
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use funpoint_http::CallbackForm;
///
/// async fn handler(CallbackForm(params): CallbackForm) {
///     // params is the decoded callback parameter set
/// }
///
/// let app = Router::new().route("/notify", post(handler));
/// ```
pub struct CallbackForm(pub ParameterSet);

#[async_trait]
impl<S> FromRequest<S> for CallbackForm
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(params) = Form::<ParameterSet>::from_request(req, state)
            .await
            .map_err(|e| HttpError::ParseError(e.to_string()))?;

        Ok(CallbackForm(params))
    }
}
