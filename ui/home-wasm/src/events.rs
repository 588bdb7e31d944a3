//! Event binding.
//!
//! Wires the wallet input and the three buttons. Handlers are synchronous and
//! share nothing but the elements they were given.

use cnt_wallet_core::{AgreementPanel, ExternalLink, WalletController};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{DomElement, Elements, InputField, WindowLocation};
use crate::state::LocalStorage;

/// Helper: attach a listener for `$event` to an element, leaking the closure
/// for the lifetime of the page.
macro_rules! on_event {
    ($el:expr, $event:expr, $arg:ty, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut($arg)>);
        $el.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Report a handler failure. Nothing is retried or shown to the user.
fn report(action: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        gloo_console::error!(format!("{action} failed: {e:#}"));
    }
}

/// Bind all UI event listeners. Call once after the wallet has been loaded.
pub fn bind_events(
    els: &Elements,
    wallet: &WalletController<LocalStorage, InputField>,
    panel: &AgreementPanel<DomElement>,
    link: &ExternalLink<WindowLocation>,
) -> Result<(), JsValue> {
    // ── Wallet ──
    {
        let wallet = wallet.clone();
        on_event!(els.wallet, "blur", web_sys::FocusEvent, move |_: web_sys::FocusEvent| {
            report("wallet commit", wallet.commit().map(|_| ()));
        });
    }

    // ── Navigate away ──
    {
        let link = link.clone();
        on_event!(els.navigate_btn, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            gloo_console::log!(format!("navigating to {}", link.url()));
            report("navigation", link.follow());
        });
    }

    // ── Agreement panel ──
    {
        let panel = panel.clone();
        on_event!(els.show_agreement_btn, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            report("show agreement", panel.show());
        });
    }
    {
        let panel = panel.clone();
        on_event!(els.accept_btn, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            report("hide agreement", panel.hide());
        });
    }

    Ok(())
}
