//! Helpers for turning templates into HTTP responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::Render;

/// Render `template` as an HTML response with the given status code.
#[inline]
pub fn render(status_code: StatusCode, template: impl Render) -> Response {
    (status_code, Html(template.render().into_string())).into_response()
}
