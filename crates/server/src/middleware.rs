use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::request_id::RequestId;

/// Header carrying the request id, both inbound and on the response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The id assigned to the current request, or `-` when none was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLogId(pub String);

impl RequestLogId {
    fn from_extensions(extensions: &axum::http::Extensions) -> Self {
        let id = extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .unwrap_or("-");
        Self(id.to_string())
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestLogId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(&parts.extensions))
    }
}

/// Emits one debug line per request with its id, method and URI.
pub async fn request_log(request: Request, next: Next) -> Response {
    let RequestLogId(request_id) = RequestLogId::from_extensions(request.extensions());
    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "request log"
    );
    next.run(request).await
}
