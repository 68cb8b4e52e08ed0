//! Payment card management: listing, adding and deleting cards.

mod cards_page;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;

pub use cards_page::get_cards_page;
pub use self::core::{
    Card, CardDraft, CardId, CardName, CardNetwork, IssuingCountry, NO_CARD_NUMBER_PLACEHOLDER,
};
pub use create_endpoint::create_card_endpoint;
pub use create_page::get_create_card_page;
pub use delete_endpoint::delete_card_endpoint;
