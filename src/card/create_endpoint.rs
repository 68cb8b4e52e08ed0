//! Defines the endpoint for adding a new card.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, Error,
    card::{CardDraft, CardName, CardNetwork, IssuingCountry},
    endpoints,
    ledger::Ledger,
};

/// The state needed to create a card.
#[derive(Debug, Clone)]
pub struct CreateCardState {
    /// The in-memory ledger holding the cards.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for CreateCardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// The form data for creating a card.
#[derive(Debug, Deserialize)]
pub struct CardForm {
    /// The display name of the card. Must not be empty or whitespace-only.
    pub name: String,
    /// The payment network the card belongs to.
    pub network: CardNetwork,
    /// The last four digits of the card number. May be empty.
    #[serde(default)]
    pub last4: String,
    /// The country the card was issued in.
    pub country: IssuingCountry,
}

/// A route handler for adding a new card, redirects to the cards view on success.
///
/// A form with an empty or whitespace-only name is rejected with an alert
/// rather than being silently dropped, so the client always gets feedback.
pub async fn create_card_endpoint(
    State(state): State<CreateCardState>,
    Form(form): Form<CardForm>,
) -> Response {
    let name = match CardName::new(&form.name) {
        Ok(name) => name,
        Err(error) => return error.into_alert_response(),
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    ledger.add_card(CardDraft {
        name,
        network: form.network,
        last4: form.last4,
        country: form.country,
    });

    (
        HxRedirect(endpoints::CARDS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
