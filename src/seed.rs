//! Sample data used to seed the ledger at startup.
//!
//! There is no persistence layer, so every session starts from these records.

use crate::{
    card::{Card, CardName, CardNetwork, IssuingCountry, NO_CARD_NUMBER_PLACEHOLDER},
    transaction::Transaction,
};

/// The sample cards the ledger is seeded with.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card {
            id: 1,
            name: CardName::new_unchecked("Personal Visa"),
            network: CardNetwork::Visa,
            last4: "4242".to_owned(),
            country: IssuingCountry::Kenya,
        },
        Card {
            id: 2,
            name: CardName::new_unchecked("Work PayPal"),
            network: CardNetwork::PayPal,
            last4: NO_CARD_NUMBER_PLACEHOLDER.to_owned(),
            country: IssuingCountry::UnitedStates,
        },
    ]
}

/// The sample transactions the ledger is seeded with.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(1, "2025-10-28", "Groceries", "Food", -12.45),
        Transaction::new(2, "2025-10-27", "Salary", "Income", 1200.0),
        Transaction::new(3, "2025-10-25", "Uber", "Transport", -5.60),
        Transaction::new(4, "2025-10-23", "Electricity Bill", "Bills", -40.0),
    ]
}
