//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    card::{create_card_endpoint, delete_card_endpoint, get_cards_page, get_create_card_page},
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::CARDS_VIEW, get(get_cards_page))
        .route(endpoints::NEW_CARD_VIEW, get(get_create_card_page))
        .route(endpoints::POST_CARD, post(create_card_endpoint))
        .route(endpoints::DELETE_CARD, delete(delete_card_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::COFFEE, get(get_coffee))
        .layer(middleware::from_fn(logging_middleware))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
    };

    fn get_test_server() -> (TestServer, AppState) {
        let state = AppState::new("Etc/UTC", "Brian");
        let server =
            TestServer::try_new(build_router(state.clone())).expect("Could not create test server");

        (server, state)
    }

    #[tokio::test]
    async fn serves_dashboard_page() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("PesaPulse"));
    }

    #[tokio::test]
    async fn serves_cards_page_with_seeded_cards() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::CARDS_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Personal Visa"));
        assert!(response.text().contains("Work PayPal"));
    }

    #[tokio::test]
    async fn created_card_shows_up_on_cards_page() {
        let (server, _) = get_test_server();

        let response = server
            .post(endpoints::POST_CARD)
            .form(&[
                ("name", "Test Mastercard"),
                ("network", "Mastercard"),
                ("last4", "1111"),
                ("country", "Germany"),
            ])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);

        let cards_page = server.get(endpoints::CARDS_VIEW).await;
        assert!(cards_page.text().contains("Test Mastercard"));
    }

    #[tokio::test]
    async fn deleted_card_disappears_from_cards_page() {
        let (server, state) = get_test_server();
        let card_id = state.ledger.lock().unwrap().cards()[0].id;

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_CARD, card_id))
            .await;

        response.assert_status_ok();

        let cards_page = server.get(endpoints::CARDS_VIEW).await;
        assert!(!cards_page.text().contains("Personal Visa"));
    }

    #[tokio::test]
    async fn deleting_absent_card_returns_not_found() {
        let (server, _) = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_CARD, 999_999))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_not_found_page() {
        let (server, _) = get_test_server();

        let response = server.get("/definitely/not/a/route").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }

    #[tokio::test]
    async fn coffee_route_is_a_teapot() {
        let (server, _) = get_test_server();

        let response = server.get(endpoints::COFFEE).await;

        response.assert_status(StatusCode::IM_A_TEAPOT);
    }
}
