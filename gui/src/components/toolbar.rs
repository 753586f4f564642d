// Toolbar: refresh button and currency selector.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Currency;

use crate::state::app_state::AppState;

#[component]
pub fn Toolbar(on_refresh: EventHandler<()>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let selected = state.read().currency;

    rsx! {
        div {
            class: "toolbar",
            button {
                class: "refresh-button",
                onclick: move |_| on_refresh.call(()),
                b { "Refresh" }
            }
            select {
                class: "currency-select",
                value: "{selected}",
                onchange: move |evt| {
                    // The selector only offers known tickers; anything else
                    // is ignored rather than fed into the pipeline.
                    if let Ok(currency) = evt.value().parse::<Currency>() {
                        state.write().set_currency(currency);
                    }
                },
                for currency in Currency::ALL {
                    option {
                        value: "{currency}",
                        selected: currency == selected,
                        "{currency}"
                    }
                }
            }
        }
    }
}
