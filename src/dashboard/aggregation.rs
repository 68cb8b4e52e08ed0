//! Transaction data aggregation for the dashboard.
//!
//! Provides pure functions to total income and expenses, group expenses by
//! category, and sum net amounts by day. Every dashboard render recomputes
//! these from the current ledger; nothing is cached across requests.

use crate::transaction::Transaction;

/// The label used for transactions whose category is empty.
pub(super) const UNCATEGORIZED_LABEL: &str = "Other";

/// The income, expense and balance totals for a sequence of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct LedgerSummary {
    /// The sum of all positive transaction amounts.
    pub income: f64,
    /// The sum of the absolute values of all negative transaction amounts.
    pub expenses: f64,
    /// `income - expenses`.
    pub balance: f64,
}

/// Totals income, expenses and the net balance over `transactions`.
///
/// The sign of the amount alone decides the bucket: positive amounts are
/// income, negative amounts are expenses, and zero amounts count towards
/// neither. Values are not rounded here; rounding to two decimal places
/// happens at display time.
pub(super) fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in transactions {
        if transaction.amount > 0.0 {
            income += transaction.amount;
        } else if transaction.amount < 0.0 {
            expenses += transaction.amount.abs();
        }
    }

    LedgerSummary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Resolves the category label to aggregate and display a transaction under.
///
/// Returns [UNCATEGORIZED_LABEL] when `label` is empty or whitespace-only,
/// otherwise the label unchanged.
pub(super) fn effective_category(label: &str) -> &str {
    if label.trim().is_empty() {
        UNCATEGORIZED_LABEL
    } else {
        label
    }
}

/// Totals expense magnitudes per category.
///
/// Only negative amounts contribute; a category with no expenses never gets
/// an entry, even if income transactions carry its label. Entries appear in
/// order of first contributing transaction, which carries no meaning: the
/// pie chart lays slices out by value anyway.
pub(super) fn expense_totals_by_category(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.amount < 0.0) {
        let category = effective_category(&transaction.category);

        match totals.iter_mut().find(|(name, _)| *name == category) {
            Some((_, total)) => *total += transaction.amount.abs(),
            None => totals.push((category.to_owned(), transaction.amount.abs())),
        }
    }

    totals
}

/// Totals net signed amounts per day.
///
/// Unlike [expense_totals_by_category] this includes income and expenses,
/// each with its own sign, so every transaction lands in exactly one date
/// bucket. Dates are compared as exact `YYYY-MM-DD` strings and are never
/// parsed. Entries appear in order of first occurrence.
pub(super) fn net_totals_by_day(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for transaction in transactions {
        match totals.iter_mut().find(|(date, _)| *date == transaction.date) {
            Some((_, total)) => *total += transaction.amount,
            None => totals.push((transaction.date.clone(), transaction.amount)),
        }
    }

    totals
}



#[cfg(test)]
mod expense_totals_by_category_tests {
    use crate::transaction::Transaction;

    use super::{UNCATEGORIZED_LABEL, expense_totals_by_category, summarize};

    fn create_test_transaction(amount: f64, category: &str) -> Transaction {
        Transaction::new(1, "2025-10-28", "test", category, amount)
    }

    #[test]
    fn sums_expenses_per_category() {
        let transactions = vec![
            create_test_transaction(-12.45, "Food"),
            create_test_transaction(1200.0, "Income"),
            create_test_transaction(-5.60, "Transport"),
            create_test_transaction(-40.0, "Bills"),
        ];

        let totals = expense_totals_by_category(&transactions);

        assert_eq!(totals.len(), 3);
        assert!(totals.contains(&("Food".to_owned(), 12.45)));
        assert!(totals.contains(&("Transport".to_owned(), 5.60)));
        assert!(totals.contains(&("Bills".to_owned(), 40.0)));
    }

    #[test]
    fn positive_amounts_create_no_entry() {
        let transactions = vec![create_test_transaction(1200.0, "Income")];

        let totals = expense_totals_by_category(&transactions);

        assert!(totals.is_empty());
    }

    #[test]
    fn merges_repeat_categories() {
        let transactions = vec![
            create_test_transaction(-10.0, "Food"),
            create_test_transaction(-15.0, "Food"),
        ];

        let totals = expense_totals_by_category(&transactions);

        assert_eq!(totals, vec![("Food".to_owned(), 25.0)]);
    }

    #[test]
    fn empty_category_defaults_to_other() {
        let transactions = vec![
            create_test_transaction(-10.0, ""),
            create_test_transaction(-5.0, "  "),
        ];

        let totals = expense_totals_by_category(&transactions);

        assert_eq!(totals, vec![(UNCATEGORIZED_LABEL.to_owned(), 15.0)]);
    }

    #[test]
    fn entries_appear_in_order_of_first_expense() {
        let transactions = vec![
            create_test_transaction(-1.0, "Zebra"),
            create_test_transaction(-1.0, "Alpha"),
            create_test_transaction(-1.0, "Zebra"),
        ];

        let totals = expense_totals_by_category(&transactions);

        assert_eq!(totals[0].0, "Zebra");
        assert_eq!(totals[1].0, "Alpha");
    }

    #[test]
    fn category_totals_sum_to_total_expenses() {
        let transactions = vec![
            create_test_transaction(-12.45, "Food"),
            create_test_transaction(1200.0, "Income"),
            create_test_transaction(-5.60, "Transport"),
            create_test_transaction(-40.0, "Bills"),
            create_test_transaction(-3.0, ""),
            create_test_transaction(0.0, "Food"),
        ];

        let category_sum: f64 = expense_totals_by_category(&transactions)
            .iter()
            .map(|(_, total)| total)
            .sum();
        let summary = summarize(&transactions);

        assert!((category_sum - summary.expenses).abs() < 1e-9);
    }
}
