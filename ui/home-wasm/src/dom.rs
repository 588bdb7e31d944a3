//! DOM element bindings.
//!
//! All elements are resolved once at startup. A missing element fails the
//! whole bind, so no handler is attached to a half-built page.

use anyhow::anyhow;
use cnt_wallet_core::{ClassList, ElementIds, Navigator, ValueField};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Location};

// ── Helpers ──

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn by_id(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    by_id(doc, id).and_then(|e| e.dyn_into::<T>().ok())
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

// ── UI surface adapters ──

/// The wallet `<input>`.
#[derive(Clone)]
pub struct InputField(pub HtmlInputElement);

impl ValueField for InputField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }
}

/// Any element whose class list gets toggled.
#[derive(Clone)]
pub struct DomElement(pub Element);

impl ClassList for DomElement {
    fn add_class(&self, class: &str) -> anyhow::Result<()> {
        self.0.class_list().add_1(class).map_err(js_err)
    }

    fn remove_class(&self, class: &str) -> anyhow::Result<()> {
        self.0.class_list().remove_1(class).map_err(js_err)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// `window.location`.
#[derive(Clone)]
pub struct WindowLocation(pub Location);

impl Navigator for WindowLocation {
    fn replace(&self, url: &str) -> anyhow::Result<()> {
        self.0.replace(url).map_err(js_err)
    }
}

// ── Elements struct ──

/// All DOM references used by the home page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub wallet: HtmlInputElement,
    pub navigate_btn: HtmlElement,
    pub show_agreement_btn: HtmlElement,
    pub accept_btn: HtmlElement,
    pub agreement_panel: Element,
    pub location: Location,
}

macro_rules! get_el {
    ($doc:expr, $id:expr) => {
        by_id($doc, $id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($doc:expr, $id:expr) => {
        by_id_typed::<HtmlInputElement>($doc, $id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_html {
    ($doc:expr, $id:expr) => {
        by_id_typed::<HtmlElement>($doc, $id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind(ids: &ElementIds) -> Result<Elements, JsValue> {
        let doc = &document()?;
        if let Some(id) = ids.first_missing(|id| doc.get_element_by_id(id).is_some()) {
            return Err(JsValue::from_str(&format!("missing element #{id}")));
        }
        Ok(Elements {
            wallet: get_input!(doc, &ids.wallet),
            navigate_btn: get_html!(doc, &ids.navigate_button),
            show_agreement_btn: get_html!(doc, &ids.show_agreement_button),
            accept_btn: get_html!(doc, &ids.accept_button),
            agreement_panel: get_el!(doc, &ids.agreement_panel),
            location: window()?.location(),
        })
    }

    pub fn wallet_field(&self) -> InputField {
        InputField(self.wallet.clone())
    }

    pub fn agreement_panel(&self) -> DomElement {
        DomElement(self.agreement_panel.clone())
    }

    pub fn navigator(&self) -> WindowLocation {
        WindowLocation(self.location.clone())
    }
}
