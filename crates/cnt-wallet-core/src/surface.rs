//! UI surface the page logic runs against.
//!
//! The browser crate implements these over `web-sys` elements; tests use the
//! fakes at the bottom of this file.

use anyhow::Result;

/// An editable text field (the wallet input).
pub trait ValueField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Class list of an element.
pub trait ClassList {
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
    fn has_class(&self, class: &str) -> bool;
}

/// Page location.
pub trait Navigator {
    /// Replace the current history entry with `url`.
    fn replace(&self, url: &str) -> Result<()>;
}
