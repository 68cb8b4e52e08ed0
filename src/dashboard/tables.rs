//! The recent transactions panel for the dashboard.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::effective_category,
    html::{CATEGORY_BADGE_STYLE, format_currency},
    transaction::Transaction,
};

fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "font-semibold text-red-600 dark:text-red-400"
    } else {
        "font-semibold text-green-600 dark:text-green-400"
    }
}

/// Formats a signed amount with an explicit `+` or `-` prefix.
fn signed_amount(amount: f64) -> String {
    if amount < 0.0 {
        format_currency(amount)
    } else {
        format!("+{}", format_currency(amount))
    }
}

/// Renders the recent transactions list with a showing-count header.
///
/// Transactions are listed in ledger order; the ledger is read-only so this
/// is also the seed order.
pub(super) fn recent_transactions_view(transactions: &[Transaction]) -> Markup {
    html! {
        section
            id="recent-transactions"
            class="bg-white dark:bg-gray-800 border border-gray-200
                dark:border-gray-700 rounded-lg p-4 shadow-md w-full"
        {
            div class="flex items-center justify-between mb-3"
            {
                h3 class="font-semibold" { "Recent Transactions" }

                span class="text-sm text-gray-600 dark:text-gray-400"
                {
                    "Showing " (transactions.len())
                }
            }

            ul class="space-y-2"
            {
                @for transaction in transactions {
                    li class="flex items-center justify-between p-2 border border-gray-200
                        dark:border-gray-700 rounded"
                    {
                        div
                        {
                            div class="font-medium" { (transaction.description) }

                            div class="text-xs text-gray-600 dark:text-gray-400"
                            {
                                (transaction.date)
                                " "
                                span class=(CATEGORY_BADGE_STYLE)
                                {
                                    (effective_category(&transaction.category))
                                }
                            }
                        }

                        span class=(amount_class(transaction.amount))
                        {
                            (signed_amount(transaction.amount))
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod recent_transactions_tests {
    use scraper::{Html, Selector};

    use crate::transaction::Transaction;

    use super::{recent_transactions_view, signed_amount};

    #[test]
    fn signed_amount_prefixes_sign() {
        assert_eq!(signed_amount(-12.45), "-$12.45");
        assert_eq!(signed_amount(1200.0), "+$1,200.00");
        assert_eq!(signed_amount(0.0), "+$0.00");
    }

    #[test]
    fn shows_transaction_count() {
        let transactions = vec![
            Transaction::new(1, "2025-10-28", "Groceries", "Food", -12.45),
            Transaction::new(2, "2025-10-27", "Salary", "Income", 1200.0),
        ];

        let html = recent_transactions_view(&transactions).into_string();

        assert!(html.contains("Showing 2"));
    }

    #[test]
    fn renders_one_row_per_transaction() {
        let transactions = vec![
            Transaction::new(1, "2025-10-28", "Groceries", "Food", -12.45),
            Transaction::new(2, "2025-10-27", "Salary", "Income", 1200.0),
            Transaction::new(3, "2025-10-25", "Uber", "Transport", -5.60),
        ];

        let html = Html::parse_fragment(&recent_transactions_view(&transactions).into_string());
        let row_selector = Selector::parse("ul li").unwrap();

        assert_eq!(html.select(&row_selector).count(), 3);
    }

    #[test]
    fn uncategorized_transactions_display_as_other() {
        let transactions = vec![Transaction::new(1, "2025-10-28", "Mystery", "", -1.0)];

        let html = recent_transactions_view(&transactions).into_string();

        assert!(html.contains("Other"));
    }
}
