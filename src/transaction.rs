//! Defines the transaction domain model.
//!
//! Transactions are read-only in this application: the ledger is seeded with
//! sample data at startup and no create, update or delete flow exists.

/// The id of a [Transaction].
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The id of the transaction.
    pub id: TransactionId,

    /// The calendar day the transaction happened on, as a `YYYY-MM-DD` string.
    ///
    /// Dates are opaque strings: the daily aggregation compares them for
    /// exact equality and never parses them as calendar dates.
    pub date: String,

    /// A text description of what the transaction was for.
    pub description: String,

    /// The category of the transaction, e.g. "Food", "Transport", "Bills".
    ///
    /// This is a free-form label. An empty label is displayed and aggregated
    /// as "Other".
    pub category: String,

    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values represent income, negative values represent expenses.
    /// This follows standard accounting conventions where money flowing into
    /// your account is positive.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(
        id: TransactionId,
        date: &str,
        description: &str,
        category: &str,
        amount: f64,
    ) -> Self {
        Self {
            id,
            date: date.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
            amount,
        }
    }
}
