//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{ledger::Ledger, seed};

/// The state of the web server.
///
/// All application data lives here for the lifetime of the process: there is
/// no persistence layer, so the ledger starts from sample data and is
/// discarded on shutdown.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory ledger holding cards and transactions.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The name to greet the user by on the dashboard.
    pub user_name: String,
}

impl AppState {
    /// Create a new [AppState] with a ledger seeded from the sample data.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland". It is only used to pick the time-of-day greeting.
    pub fn new(local_timezone: &str, user_name: &str) -> Self {
        let ledger = Ledger::new(seed::sample_cards(), seed::sample_transactions());

        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            local_timezone: local_timezone.to_owned(),
            user_name: user_name.to_owned(),
        }
    }
}
