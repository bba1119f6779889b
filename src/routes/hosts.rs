//! `Host` header filter.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::config::HostPolicy;

/// Host named by the request: the `Host` header, or the URI authority for
/// HTTP/2 requests that omit it.
fn request_host(req: &Request) -> Option<String> {
    req.headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().authority().map(axum::http::uri::Authority::as_str))
        .map(str::to_owned)
}

/// Reject requests whose host the policy does not allow with 403.
pub async fn enforce(State(policy): State<Arc<HostPolicy>>, req: Request, next: Next) -> Response {
    let host = request_host(&req);
    if policy.allows(host.as_deref()) {
        return next.run(req).await;
    }
    tracing::warn!(host = host.as_deref().unwrap_or("<none>"), path = %req.uri().path(), "blocked request for disallowed host");
    (StatusCode::FORBIDDEN, "Blocked request: this host is not allowed.").into_response()
}
