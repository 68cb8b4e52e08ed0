//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for the session's
//! transactions:
//! - **Spending by Category**: pie chart of expense totals per category
//! - **Daily Trend**: net signed amount per day as a line chart
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered into an HTML container by JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    datatype::DataPointItem,
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, Pie},
};
use maud::PreEscaped;

use crate::{
    dashboard::aggregation::{expense_totals_by_category, net_totals_by_day},
    html::HeadElement,
    transaction::Transaction,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
///
/// # Arguments
/// * `charts` - The charts to generate initialization scripts for
///
/// # Returns
/// HeadElement containing the initialization JavaScript.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A pie chart of expense totals per category.
pub(super) fn category_chart(transactions: &[Transaction]) -> Chart {
    let totals = expense_totals_by_category(transactions);
    let data: Vec<DataPointItem> = totals
        .into_iter()
        .map(|(category, total)| DataPointItem::new(total).name(category))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Spending by Category")
                .subtext("This session"),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(Pie::new().name("Expenses").radius("65%").data(data))
}

/// A line chart of the net signed amount per day.
pub(super) fn daily_trend_chart(transactions: &[Transaction]) -> Chart {
    let totals = net_totals_by_day(transactions);
    let (labels, values): (Vec<String>, Vec<f64>) = totals.into_iter().unzip();

    Chart::new()
        .title(Title::new().text("Daily Trend").subtext("Net amount per day"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lte(-1).color("red"),
            VisualMapPiece::new().gte(0).color("green"),
        ]))
        .series(Line::new().name("Net Amount").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod chart_tests {
    use crate::transaction::Transaction;

    use super::{category_chart, daily_trend_chart};

    fn get_test_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(1, "2025-10-28", "Groceries", "Food", -12.45),
            Transaction::new(2, "2025-10-27", "Salary", "Income", 1200.0),
            Transaction::new(3, "2025-10-25", "Uber", "Transport", -5.60),
        ]
    }

    #[test]
    fn category_chart_options_are_valid_json() {
        let options = category_chart(&get_test_transactions()).to_string();

        let parsed: serde_json::Value =
            serde_json::from_str(&options).expect("chart options should be valid JSON");

        assert!(parsed.get("series").is_some());
    }

    #[test]
    fn category_chart_includes_expense_categories_only() {
        let options = category_chart(&get_test_transactions()).to_string();

        assert!(options.contains("Food"));
        assert!(options.contains("Transport"));
        // Income is positive, so no pie slice.
        assert!(!options.contains("\"Income\""));
    }

    #[test]
    fn daily_trend_chart_includes_every_transaction_date() {
        let options = daily_trend_chart(&get_test_transactions()).to_string();

        assert!(options.contains("2025-10-28"));
        assert!(options.contains("2025-10-27"));
        assert!(options.contains("2025-10-25"));
    }
}
