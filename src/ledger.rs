//! The in-memory state container for the application session.
//!
//! The [Ledger] exclusively owns the card and transaction collections. Reads
//! go through the typed accessors and all writes go through [Ledger::add_card]
//! and [Ledger::delete_card], the only two mutation flows in the app.

use time::OffsetDateTime;

use crate::{
    card::{Card, CardDraft, CardId},
    transaction::Transaction,
};

/// The number of rows removed by a delete operation.
pub type RowsAffected = usize;

/// Holds the cards and transactions for the current session.
///
/// Both collections are ordered: cards display newest-first (new cards are
/// prepended), transactions keep their seed order. There is no persistence,
/// so the ledger lives exactly as long as the process.
#[derive(Debug)]
pub struct Ledger {
    cards: Vec<Card>,
    transactions: Vec<Transaction>,
    last_card_id: CardId,
}

impl Ledger {
    /// Create a ledger from the given collections.
    pub fn new(cards: Vec<Card>, transactions: Vec<Transaction>) -> Self {
        let last_card_id = cards.iter().map(|card| card.id).max().unwrap_or(0);

        Self {
            cards,
            transactions,
            last_card_id,
        }
    }

    /// The cards in the ledger, newest first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The transactions in the ledger, in seed order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Add a card to the front of the card list and return it.
    ///
    /// The new card gets a fresh id derived from the wall clock. Validation
    /// happens when constructing the [CardDraft], so this operation cannot
    /// fail.
    pub fn add_card(&mut self, draft: CardDraft) -> Card {
        let card = draft.into_card(self.next_card_id());
        self.cards.insert(0, card.clone());

        card
    }

    /// Remove the card with the given id, returning the number of cards
    /// removed.
    ///
    /// Deleting an id that is not in the ledger is a no-op and returns zero.
    pub fn delete_card(&mut self, id: CardId) -> RowsAffected {
        let count_before = self.cards.len();
        self.cards.retain(|card| card.id != id);

        count_before - self.cards.len()
    }

    /// Generate a fresh card id.
    ///
    /// Ids are the current Unix time in milliseconds. Two cards created
    /// within the same millisecond would collide, so the candidate is bumped
    /// past the last id handed out.
    fn next_card_id(&mut self) -> CardId {
        let now_millis = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as CardId;
        let id = now_millis.max(self.last_card_id + 1);
        self.last_card_id = id;

        id
    }
}


#[cfg(test)]
mod delete_card_tests {
    use crate::card::{CardDraft, CardName, CardNetwork, IssuingCountry};

    use super::Ledger;

    fn get_test_ledger() -> Ledger {
        let mut ledger = Ledger::new(vec![], vec![]);
        ledger.add_card(CardDraft {
            name: CardName::new("Personal Visa").unwrap(),
            network: CardNetwork::Visa,
            last4: "4242".to_owned(),
            country: IssuingCountry::Kenya,
        });

        ledger
    }

    #[test]
    fn delete_card_removes_matching_card() {
        let mut ledger = get_test_ledger();
        let id = ledger.cards()[0].id;

        let rows_affected = ledger.delete_card(id);

        assert_eq!(rows_affected, 1);
        assert!(ledger.cards().is_empty());
    }

    #[test]
    fn delete_card_with_absent_id_is_a_no_op() {
        let mut ledger = get_test_ledger();
        let cards_before = ledger.cards().to_vec();

        let rows_affected = ledger.delete_card(999_999);

        assert_eq!(rows_affected, 0);
        assert_eq!(ledger.cards(), cards_before);
    }

    #[test]
    fn delete_card_is_idempotent() {
        let mut ledger = get_test_ledger();
        let id = ledger.cards()[0].id;

        assert_eq!(ledger.delete_card(id), 1);
        assert_eq!(ledger.delete_card(id), 0);
        assert!(ledger.cards().is_empty());
    }
}
