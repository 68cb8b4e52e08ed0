//! Defines the core data models for payment cards.

use std::{fmt::Display, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// The id of a [Card].
pub type CardId = i64;

/// Displayed in place of the last four digits for cards without a card
/// number, e.g. PayPal accounts.
pub const NO_CARD_NUMBER_PLACEHOLDER: &str = "—";

/// The name of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardName(String);

impl CardName {
    /// Create a card name.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCardName] if `name` is empty
    /// or whitespace-only.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCardName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a card name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardName::new(s)
    }
}

impl Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The payment network a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CardNetwork {
    /// A Visa credit or debit card.
    Visa,
    /// A Mastercard credit or debit card.
    Mastercard,
    /// A PayPal account, which has no card number.
    PayPal,
}

impl CardNetwork {
    /// All payment networks, in the order they appear in the add-card form.
    pub const ALL: [CardNetwork; 3] = [
        CardNetwork::Visa,
        CardNetwork::Mastercard,
        CardNetwork::PayPal,
    ];

    /// The display name of the network, which doubles as its form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::PayPal => "PayPal",
        }
    }
}

impl Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The country a card was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IssuingCountry {
    /// Kenya.
    Kenya,
    /// The United States.
    #[serde(rename = "USA")]
    UnitedStates,
    /// The United Kingdom.
    #[serde(rename = "UK")]
    UnitedKingdom,
    /// Germany.
    Germany,
}

impl IssuingCountry {
    /// All issuing countries, in the order they appear in the add-card form.
    pub const ALL: [IssuingCountry; 4] = [
        IssuingCountry::Kenya,
        IssuingCountry::UnitedStates,
        IssuingCountry::UnitedKingdom,
        IssuingCountry::Germany,
    ];

    /// The display name of the country, which doubles as its form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuingCountry::Kenya => "Kenya",
            IssuingCountry::UnitedStates => "USA",
            IssuingCountry::UnitedKingdom => "UK",
            IssuingCountry::Germany => "Germany",
        }
    }
}

impl Display for IssuingCountry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment card registered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// The id of the card.
    pub id: CardId,
    /// The display name of the card, e.g. "Personal Visa".
    pub name: CardName,
    /// The payment network the card belongs to.
    pub network: CardNetwork,
    /// The last four digits of the card number, or
    /// [NO_CARD_NUMBER_PLACEHOLDER] for cards without one.
    pub last4: String,
    /// The country the card was issued in.
    pub country: IssuingCountry,
}

/// A card that has been validated but not yet added to the ledger.
///
/// A draft carries no id: the ledger assigns one when the card is added.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    /// The validated display name of the card.
    pub name: CardName,
    /// The payment network the card belongs to.
    pub network: CardNetwork,
    /// The last four digits of the card number. May be empty.
    pub last4: String,
    /// The country the card was issued in.
    pub country: IssuingCountry,
}

impl CardDraft {
    /// Convert the draft into a [Card] with the given id.
    ///
    /// An empty last4 becomes [NO_CARD_NUMBER_PLACEHOLDER] so that cards
    /// without a card number still render a caption.
    pub fn into_card(self, id: CardId) -> Card {
        let last4 = self.last4.trim();
        let last4 = if last4.is_empty() {
            NO_CARD_NUMBER_PLACEHOLDER.to_owned()
        } else {
            last4.to_owned()
        };

        Card {
            id,
            name: self.name,
            network: self.network,
            last4,
            country: self.country,
        }
    }
}
