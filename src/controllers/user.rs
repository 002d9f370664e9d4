//! User actions.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::html;

use crate::routing::Params;

/// `User ID: <id>`, with the id HTML-escaped.
pub fn show(params: &Params) -> Response {
    let Some(id) = params.get("id") else {
        tracing::error!("user.show routed without an `id` placeholder");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Missing route parameter").into_response();
    };

    let markup = html! { "User ID: " (id) };
    Html(markup.into_string()).into_response()
}

pub fn create(_params: &Params) -> Response {
    (StatusCode::CREATED, "User created!").into_response()
}
