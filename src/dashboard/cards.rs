//! Stat cards for the dashboard summary row.
//!
//! Shows the net balance, total income and total expenses for the session's
//! transactions.

use maud::{Markup, html};

use crate::{dashboard::aggregation::LedgerSummary, html::format_currency};

const STAT_CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";

const STAT_LABEL_STYLE: &str = "text-sm text-gray-600 dark:text-gray-400";

/// Renders the summary row: balance, income and expenses as stat cards.
///
/// Amounts are rounded to two decimal places here at display time only; the
/// underlying summary keeps full precision.
pub(super) fn summary_cards_view(summary: &LedgerSummary) -> Markup {
    html! {
        section
            id="summary-cards"
            class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6 w-full"
        {
            div class=(STAT_CARD_STYLE)
            {
                div class=(STAT_LABEL_STYLE) { "Balance" }
                div class="text-xl font-semibold" { (format_currency(summary.balance)) }
            }

            div class=(STAT_CARD_STYLE)
            {
                div class=(STAT_LABEL_STYLE) { "Income" }
                div class="text-xl font-semibold text-green-600 dark:text-green-400"
                {
                    (format_currency(summary.income))
                }
            }

            div class=(STAT_CARD_STYLE)
            {
                div class=(STAT_LABEL_STYLE) { "Expenses" }
                div class="text-xl font-semibold text-red-600 dark:text-red-400"
                {
                    (format_currency(-summary.expenses))
                }
            }
        }
    }
}
