//! Home page logic: wallet balance controller, agreement panel, external link.
//!
//! Everything here runs against the traits in [`surface`] so it can be driven
//! without a browser.

pub mod actions;
pub mod config;
pub mod surface;
pub mod wallet;

pub use actions::{AgreementPanel, ExternalLink};
pub use config::{ElementIds, HomeConfig};
pub use surface::{ClassList, Navigator, ValueField};
pub use wallet::{Balance, LoadOutcome, WalletController};
