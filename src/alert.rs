//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as small HTML fragments that htmx swaps into the
//! page, either in place of the element that triggered the request or into
//! the fixed `#alert-container` for error responses.

use axum::response::{IntoResponse, Response};
use maud::{Markup, Render, html};

const SUCCESS_ALERT_STYLE: &str = "p-4 mb-4 text-sm text-green-800 rounded-lg \
    bg-green-50 dark:bg-gray-800 dark:text-green-400";

const ERROR_ALERT_STYLE: &str = "p-4 mb-4 text-sm text-red-800 rounded-lg \
    bg-red-50 dark:bg-gray-800 dark:text-red-400";

/// An alert message to display to the user.
#[derive(Debug, Clone)]
pub enum Alert {
    /// A success message with no further details.
    SuccessSimple {
        /// The message to display.
        message: String,
    },
    /// An error message with details on what went wrong and what to do next.
    Error {
        /// The headline of the alert.
        message: String,
        /// What went wrong and/or how to fix it.
        details: String,
    },
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }
}

impl Render for Alert {
    fn render(&self) -> Markup {
        match self {
            Alert::SuccessSimple { message } => html!(
                div class=(SUCCESS_ALERT_STYLE) role="alert"
                {
                    span class="font-medium" { (message) }
                }
            ),
            Alert::Error { message, details } => html!(
                div class=(ERROR_ALERT_STYLE) role="alert"
                {
                    span class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }
            ),
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Render::render(&self).into_response()
    }
}
