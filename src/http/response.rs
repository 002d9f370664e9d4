//! Response mapping for routing failures.
//!
//! # Design Decisions
//! - NotFound always becomes 404; method mismatches are not reported as 405
//! - Bodies are plain text and never echo the request path

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::http::request::PathError;
use crate::routing::NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, "Not Found").into_response()
    }
}

impl IntoResponse for PathError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, "Bad Request").into_response()
    }
}
