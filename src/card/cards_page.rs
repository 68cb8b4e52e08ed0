//! Displays the user's payment cards.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    card::Card,
    endpoints::{self, format_endpoint},
    html::{
        CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, delete_action_button,
    },
    ledger::Ledger,
    navigation::NavBar,
};

/// The state needed for the [get_cards_page](crate::card::get_cards_page) route handler.
#[derive(Debug, Clone)]
pub struct CardsPageState {
    /// The in-memory ledger holding the cards.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for CardsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// The card data to display in the view
#[derive(Debug, PartialEq)]
struct CardTableRow {
    name: String,
    network: String,
    last4: String,
    country: String,
    delete_url: String,
}

impl From<&Card> for CardTableRow {
    fn from(card: &Card) -> Self {
        Self {
            name: card.name.to_string(),
            network: card.network.to_string(),
            last4: card.last4.clone(),
            country: card.country.to_string(),
            delete_url: format_endpoint(endpoints::DELETE_CARD, card.id),
        }
    }
}

fn cards_view(cards: &[CardTableRow]) -> Markup {
    let create_card_page_url = endpoints::NEW_CARD_VIEW;
    let nav_bar = NavBar::new(endpoints::CARDS_VIEW).into_html();

    let table_row = |card: &CardTableRow| {
        let action_links = delete_action_button(
            &card.delete_url,
            &format!(
                "Are you sure you want to delete the card '{}'? This cannot be undone.",
                card.name
            ),
            "closest tr",
            "delete",
        );

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                th
                    scope="row"
                    class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
                {
                    (card.name)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CATEGORY_BADGE_STYLE) { (card.network) }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    (card.network) " • " (card.last4)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    (card.country)
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        (action_links)
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Your Cards" }

                    a href=(create_card_page_url) class=(LINK_STYLE)
                    {
                        "Add Card"
                    }
                }

                section class="w-full overflow-x-auto lg:overflow-visible dark:bg-gray-800 lg:max-w-5xl lg:w-full lg:mx-auto"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Name"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Network"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Number"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Country"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Actions"
                                }
                            }
                        }

                        tbody
                        {
                            @for card in cards {
                                (table_row(card))
                            }

                            @if cards.is_empty() {
                                tr
                                {
                                    td
                                        colspan="5"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No cards found. Add a card "
                                        a href=(create_card_page_url) class=(LINK_STYLE)
                                        {
                                            "here"
                                        }
                                        "."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Cards", &[], &content)
}

/// Renders the cards page showing all registered cards, newest first.
pub async fn get_cards_page(State(state): State<CardsPageState>) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    let cards: Vec<CardTableRow> = ledger.cards().iter().map(CardTableRow::from).collect();

    Ok(cards_view(&cards).into_response())
}

#[cfg(test)]
mod cards_template_tests {
    use std::iter::zip;

    use scraper::{ElementRef, Html, Selector};

    use crate::{
        card::{Card, CardName, CardNetwork, IssuingCountry, cards_page::cards_view},
        endpoints,
        test_utils::assert_valid_html,
    };

    use super::CardTableRow;

    #[test]
    fn renders_card_rows() {
        let card = Card {
            id: 1,
            name: CardName::new_unchecked("Personal Visa"),
            network: CardNetwork::Visa,
            last4: "4242".to_owned(),
            country: IssuingCountry::Kenya,
        };
        let cards = vec![CardTableRow::from(&card)];

        let rendered_template = cards_view(&cards).into_string();

        let html = Html::parse_document(&rendered_template);
        assert_valid_html(&html);
        let table = must_get_table(&html);
        assert_table_contains_cards(table, &cards);
    }

    #[test]
    fn renders_empty_state_with_create_link() {
        let cards = vec![];

        let rendered_template = cards_view(&cards).into_string();

        let html = Html::parse_document(&rendered_template);
        assert_valid_html(&html);
        let cell = must_get_no_data_cell(&html);
        assert_cell_contains_link(cell, endpoints::NEW_CARD_VIEW);
    }

    #[track_caller]
    fn must_get_table(html: &Html) -> ElementRef<'_> {
        let table_selector = Selector::parse("table").unwrap();
        html.select(&table_selector)
            .next()
            .expect("Could not find table in HTML")
    }

    #[track_caller]
    fn assert_table_contains_cards(table: ElementRef<'_>, cards: &[CardTableRow]) {
        let table_row_selector = Selector::parse("tbody tr").unwrap();
        let row_header_selector = Selector::parse("th").unwrap();
        let row_cell_selector = Selector::parse("td").unwrap();
        let button_selector = Selector::parse("button").unwrap();

        let table_rows: Vec<_> = table.select(&table_row_selector).collect();
        assert_eq!(
            table_rows.len(),
            cards.len(),
            "want {} table rows, got {}",
            cards.len(),
            table_rows.len()
        );

        for (row, (table_row, want)) in zip(table_rows, cards).enumerate() {
            let got_name: String = table_row
                .select(&row_header_selector)
                .next()
                .unwrap_or_else(|| panic!("Could not find table header <th> in table row {row}."))
                .text()
                .collect::<String>()
                .trim()
                .to_string();
            assert_eq!(
                want.name, got_name,
                "want card '{}', got '{got_name}'.",
                want.name
            );

            let columns: Vec<ElementRef<'_>> = table_row.select(&row_cell_selector).collect();
            assert_eq!(
                4,
                columns.len(),
                "Want 4 table cells <td> in table row {row}, got {}",
                columns.len()
            );

            let got_network: String = columns[0].text().collect::<String>().trim().to_string();
            let got_number: String = columns[1].text().collect::<String>().trim().to_string();
            let got_country: String = columns[2].text().collect::<String>().trim().to_string();

            assert_eq!(want.network, got_network);
            assert!(
                got_number.contains(&want.last4),
                "want number caption containing '{}', got '{got_number}'",
                want.last4
            );
            assert_eq!(want.country, got_country);

            let got_actions: Vec<ElementRef<'_>> = columns[3].select(&button_selector).collect();
            assert_eq!(
                1,
                got_actions.len(),
                "Want 1 delete button per table row, got {} for table row {row}",
                got_actions.len()
            );
            let got_delete_url = got_actions[0].attr("hx-delete").unwrap_or_else(|| {
                panic!("hx-delete attribute not set for button in table row {row}")
            });
            assert_eq!(
                want.delete_url, got_delete_url,
                "want delete URL {}, got {got_delete_url}",
                want.delete_url
            );
        }
    }

    #[track_caller]
    fn must_get_no_data_cell(html: &Html) -> ElementRef<'_> {
        let cell_selector = Selector::parse("td[colspan='5']").unwrap();
        html.select(&cell_selector)
            .next()
            .expect("Could not find table cell with colspan='5' in HTML")
    }

    #[track_caller]
    fn assert_cell_contains_link(cell: ElementRef<'_>, want_url: &str) {
        let link_selector = Selector::parse("a").unwrap();
        let link = cell
            .select(&link_selector)
            .next()
            .expect("Could not find link element in cell.");
        let link_target = link
            .attr("href")
            .expect("Link element does not define an href attribute.");

        assert_eq!(
            want_url, link_target,
            "want link with href = \"{want_url}\", but got \"{link_target}\""
        );
    }
}
