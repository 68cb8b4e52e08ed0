//! Defines the endpoint for deleting a card.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, alert::Alert, card::CardId, ledger::Ledger};

/// The state needed to delete a card.
#[derive(Debug, Clone)]
pub struct DeleteCardState {
    /// The in-memory ledger holding the cards.
    ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DeleteCardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a card, responds with an alert.
pub async fn delete_card_endpoint(
    State(state): State<DeleteCardState>,
    Path(card_id): Path<CardId>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    match ledger.delete_card(card_id) {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        rows_affected if rows_affected != 0 => Alert::SuccessSimple {
            message: "Card deleted successfully".to_owned(),
        }
        .into_response(),
        _ => Error::DeleteMissingCard.into_alert_response(),
    }
}
