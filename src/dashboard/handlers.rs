//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI
//! - The state type used by the handler

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{LedgerSummary, summarize},
        cards::summary_cards_view,
        charts::{DashboardChart, category_chart, charts_script, daily_trend_chart},
        greeting::greeting_view,
        tables::recent_transactions_view,
    },
    endpoints,
    html::{BUTTON_PLACEHOLDER_STYLE, HeadElement, base, link},
    ledger::Ledger,
    navigation::NavBar,
    timezone::get_local_offset,
    transaction::Transaction,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The in-memory ledger holding the transactions.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The name to greet the user by.
    pub user_name: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
            user_name: state.user_name.clone(),
        }
    }
}

/// Display a page with an overview of the user's spending.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    let local_timezone = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;
    let local_hour = OffsetDateTime::now_utc().to_offset(local_timezone).hour();
    let greeting = greeting_view(&state.user_name, local_hour);

    let transactions = ledger.transactions();

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar, greeting).into_response());
    }

    let summary = summarize(transactions);
    let charts = build_dashboard_charts(transactions);

    Ok(dashboard_view(nav_bar, greeting, &summary, &charts, transactions).into_response())
}

/// Creates the array of dashboard charts from transaction data.
///
/// Generates two charts: spending by category and the daily net trend.
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(transactions: &[Transaction]) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "category-chart",
            options: category_chart(transactions).to_string(),
        },
        DashboardChart {
            id: "daily-trend-chart",
            options: daily_trend_chart(transactions).to_string(),
        },
    ]
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar, greeting: Markup) -> Markup {
    let nav_bar = nav_bar.into_html();
    let cards_link = link(endpoints::CARDS_VIEW, "your cards");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            (greeting)

            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Summaries and charts will show up here once the ledger has
                some transactions. In the meantime you can manage " (cards_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with summary cards, charts and the recent
/// transactions panel.
fn dashboard_view(
    nav_bar: NavBar,
    greeting: Markup,
    summary: &LedgerSummary,
    charts: &[DashboardChart],
    transactions: &[Transaction],
) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (greeting)

            (summary_cards_view(summary))

            section
                id="charts"
                class="w-full mx-auto mb-4"
            {
                div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
                {
                    @for chart in charts {
                        div
                            id=(chart.id)
                            class="min-h-[380px] rounded dark:bg-gray-100"
                        {}
                    }
                }
            }

            div class="grid grid-cols-1 lg:grid-cols-3 gap-4 w-full"
            {
                div class="lg:col-span-2"
                {
                    (recent_transactions_view(transactions))
                }

                (quick_actions_view())
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &scripts, &content)
}

/// Renders the quick actions panel.
///
/// These actions are placeholders carried over from the design: they are
/// rendered disabled and wired to no endpoint.
fn quick_actions_view() -> Markup {
    html!(
        section
            id="quick-actions"
            class="bg-white dark:bg-gray-800 border border-gray-200
                dark:border-gray-700 rounded-lg p-4 shadow-md"
        {
            h4 class="font-semibold mb-2" { "Quick Actions" }

            div class="flex flex-col gap-2"
            {
                button type="button" disabled title="Coming soon" class=(BUTTON_PLACEHOLDER_STYLE)
                {
                    "Add Transaction"
                }

                button type="button" disabled title="Coming soon" class=(BUTTON_PLACEHOLDER_STYLE)
                {
                    "Export CSV"
                }

                button type="button" disabled title="Coming soon" class=(BUTTON_PLACEHOLDER_STYLE)
                {
                    "Settings"
                }
            }
        }
    )
}
