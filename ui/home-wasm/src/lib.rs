//! cnt-777 home page WASM script.
//!
//! Loads the wallet balance from `localStorage`, clamps edits on blur and
//! wires the agreement panel and blackjack buttons.

pub mod dom;
pub mod events;
pub mod state;

use cnt_wallet_core::{AgreementPanel, ExternalLink, LoadOutcome, WalletController};
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Bind elements, load the balance, then attach handlers.
fn init() -> Result<(), JsValue> {
    let config = state::load_config();
    let els = dom::Elements::bind(&config.element_ids)?;

    let wallet = WalletController::from_config(state::LocalStorage, els.wallet_field(), &config);
    match wallet.load() {
        Ok(LoadOutcome::Seeded(seed)) => {
            gloo_console::debug!(format!("wallet seeded with {seed}"));
        }
        Ok(LoadOutcome::Restored(_)) => {}
        Err(e) => gloo_console::error!(format!("wallet load failed: {e:#}")),
    }

    let panel = AgreementPanel::from_config(els.agreement_panel(), &config);
    let link = ExternalLink::from_config(els.navigator(), &config);

    events::bind_events(&els, &wallet, &panel, &link)
}
