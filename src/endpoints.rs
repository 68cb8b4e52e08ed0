//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/cards/{card_id}', use [format_endpoint].

/// The root route which redirects to the dashboard page.
pub const ROOT: &str = "/";
/// The landing page showing the spending overview.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for displaying the user's payment cards.
pub const CARDS_VIEW: &str = "/cards";
/// The page for adding a new payment card.
pub const NEW_CARD_VIEW: &str = "/cards/new";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route to create a card.
pub const POST_CARD: &str = "/api/cards";
/// The route to delete a card.
pub const DELETE_CARD: &str = "/api/cards/{card_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/cards/{card_id}', '{card_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
