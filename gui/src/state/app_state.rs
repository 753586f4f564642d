// Global application state for the GUI, provided through Dioxus context.
//
// Deliberately small: the displayed snapshot lives in the refresh resource,
// so the only interactive state is the selected currency.
use shared::models::Currency;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    pub currency: Currency,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            currency: Currency::Btc,
        }
    }
}

impl AppState {
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }
}
