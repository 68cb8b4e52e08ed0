//! Defines the page for adding a new payment card.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    card::{CardNetwork, IssuingCountry},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
};

fn new_card_form_view() -> Markup {
    let create_card_endpoint = endpoints::POST_CARD;

    html! {
        form
            hx-post=(create_card_endpoint)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Card Name"
                }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Card name (e.g. Personal Visa)"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="grid grid-cols-2 gap-2"
            {
                div
                {
                    label
                        for="network"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Network"
                    }

                    select
                        id="network"
                        name="network"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for network in CardNetwork::ALL {
                            option value=(network.as_str()) { (network) }
                        }
                    }
                }

                div
                {
                    label
                        for="last4"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Last 4 digits"
                    }

                    input
                        id="last4"
                        type="text"
                        name="last4"
                        placeholder="Last 4 digits"
                        maxlength="4"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="country"
                    class=(FORM_LABEL_STYLE)
                {
                    "Country"
                }

                select
                    id="country"
                    name="country"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for country in IssuingCountry::ALL {
                        option value=(country.as_str()) { (country) }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Card" }
        }
    }
}

fn new_card_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_CARD_VIEW).into_html();
    let form = new_card_form_view();

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) { (form) }
    };

    base("Add Card", &[], &content)
}

/// Renders the page for adding a new payment card.
pub async fn get_create_card_page() -> Response {
    new_card_view().into_response()
}
