//! Request handling at the routing boundary.
//!
//! # Responsibilities
//! - Generate unique request IDs (UUID v4)
//! - Turn a raw request path into the clean path the dispatcher expects
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The query string never reaches the dispatcher (only `uri().path()` is used)
//! - Segments are decoded one by one; an encoded '/' never becomes a separator

use axum::http::{HeaderName, HeaderValue, Request};
use thiserror::Error;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Assigns a fresh UUID v4 to requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request path cannot be turned into a routable path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("request path is not valid UTF-8 once percent-decoded")]
    InvalidEncoding,

    #[error("request path segment contains an encoded '/'")]
    EncodedSeparator,
}

/// Split `raw` on `/`, percent-decode each segment, and rejoin it with
/// runs of `/` collapsed into one.
///
/// A segment that decodes to something containing `/` is rejected, so a
/// client segment is never split into two.
///
/// ```
/// use route_dispatch::http::normalize_path;
///
/// assert_eq!(normalize_path("//user///John%20Doe").unwrap(), "/user/John Doe");
/// assert!(normalize_path("/user/7%2Fedit").is_err());
/// ```
pub fn normalize_path(raw: &str) -> Result<String, PathError> {
    let mut path = String::with_capacity(raw.len() + 1);

    for segment in raw.split('/').filter(|s| !s.is_empty()) {
        let decoded = urlencoding::decode(segment).map_err(|_| PathError::InvalidEncoding)?;
        if decoded.contains('/') {
            return Err(PathError::EncodedSeparator);
        }
        path.push('/');
        path.push_str(&decoded);
    }

    if path.is_empty() || raw.ends_with('/') {
        path.push('/');
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clean_path() {
        assert_eq!(normalize_path("/user/42").unwrap(), "/user/42");
        assert_eq!(normalize_path("/").unwrap(), "/");
    }

    #[test]
    fn test_normalize_collapses_slashes() {
        assert_eq!(normalize_path("//user//42").unwrap(), "/user/42");
        assert_eq!(normalize_path("/user/42//").unwrap(), "/user/42/");
    }

    #[test]
    fn test_normalize_decodes() {
        assert_eq!(normalize_path("/user/%3Cb%3E").unwrap(), "/user/<b>");
        assert_eq!(normalize_path("user").unwrap(), "/user");
    }

    #[test]
    fn test_normalize_rejects_encoded_slash() {
        assert_eq!(normalize_path("/user/a%2Fb"), Err(PathError::EncodedSeparator));
        assert_eq!(normalize_path("/user/a%2fb"), Err(PathError::EncodedSeparator));
        assert_eq!(normalize_path("/%2F"), Err(PathError::EncodedSeparator));
    }

    #[test]
    fn test_normalize_rejects_invalid_utf8() {
        assert_eq!(normalize_path("/user/%FF"), Err(PathError::InvalidEncoding));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let mut generator = RequestIdGenerator;
        let request = Request::new(());
        let a = generator.make_request_id(&request).unwrap();
        let b = generator.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
        assert_eq!(a.header_value().len(), 36);
    }
}
