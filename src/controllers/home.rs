use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::routing::Params;

pub fn index(_params: &Params) -> Response {
    (StatusCode::OK, "Welcome home!").into_response()
}
