//! Wallet display controller.
//!
//! Keeps the wallet input in sync with the stored balance: seeds the balance
//! on load and clamps edits when the input loses focus.

use anyhow::Result;
use cnt_storage::{BalanceStore, KeyValueStore, format_number, parse_number};
use std::fmt;
use tracing::{debug, warn};

use crate::config::HomeConfig;
use crate::surface::ValueField;

/// A committed, non-negative balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Balance(f64);

impl Balance {
    pub const ZERO: Balance = Balance(0.0);

    /// Clamps negative and non-numeric values to zero. `Infinity` is kept.
    pub fn clamped(value: f64) -> Self {
        if value > 0.0 {
            Balance(value)
        } else {
            Balance::ZERO
        }
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0))
    }
}

/// What `load` did with the stored value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Nothing usable was stored; the seed was written and displayed.
    Seeded(f64),
    /// The stored value was displayed as-is.
    Restored(f64),
}

#[derive(Clone, Debug)]
pub struct WalletController<S, F> {
    balances: BalanceStore<S>,
    field: F,
    seed: f64,
}

impl<S, F> WalletController<S, F>
where
    S: KeyValueStore,
    F: ValueField,
{
    pub fn new(balances: BalanceStore<S>, field: F, seed: f64) -> Self {
        Self {
            balances,
            field,
            seed,
        }
    }

    pub fn from_config(store: S, field: F, config: &HomeConfig) -> Self {
        Self::new(
            BalanceStore::with_key(store, config.storage_key.clone()),
            field,
            config.seed_balance,
        )
    }

    /// Page-load initialization.
    ///
    /// A stored zero is indistinguishable from "never set" and gets re-seeded,
    /// as does text that does not parse.
    pub fn load(&self) -> Result<LoadOutcome> {
        let stored = self.balances.read()?;

        if stored == 0.0 || stored.is_nan() {
            self.balances.write(self.seed)?;
            self.field.set_value(&format_number(self.seed));
            debug!(seed = self.seed, "seeded wallet balance");
            return Ok(LoadOutcome::Seeded(self.seed));
        }

        self.field.set_value(&format_number(stored));
        Ok(LoadOutcome::Restored(stored))
    }

    /// Focus-loss commit: parse the field, clamp, persist, re-display.
    ///
    /// A failed write leaves the field as typed.
    pub fn commit(&self) -> Result<Balance> {
        let text = self.field.value();
        let parsed = parse_number(&text);

        if parsed.is_nan() {
            warn!(input = %text, "wallet input is not a number, clamping to 0");
        }
        let balance = Balance::clamped(parsed);

        self.balances.write(balance.amount())?;
        self.field.set_value(&balance.to_string());
        debug!(input = %text, %balance, "committed wallet balance");
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::fake::FakeField;
    use crate::surface::fake::FailingStore;
    use cnt_storage::{BALANCE_KEY, InMemoryStore};

    impl<S, F> WalletController<S, F> {
        fn field(&self) -> &F {
            &self.field
        }
    }

    fn controller(store: &InMemoryStore) -> WalletController<InMemoryStore, FakeField> {
        WalletController::from_config(store.clone(), FakeField::default(), &HomeConfig::default())
    }

    fn stored(store: &InMemoryStore) -> Option<String> {
        store.get_item(BALANCE_KEY).unwrap()
    }

    #[test]
    fn load_seeds_when_nothing_is_stored() -> Result<()> {
        let store = InMemoryStore::default();
        let wallet = controller(&store);

        assert_eq!(wallet.load()?, LoadOutcome::Seeded(1_000_000.0));
        assert_eq!(stored(&store).as_deref(), Some("1000000"));
        assert_eq!(wallet.field().value(), "1000000");
        Ok(())
    }

    #[test]
    fn load_seeds_every_text_that_converts_to_zero() -> Result<()> {
        for text in ["0", "", "  ", "-0", "0.0", "0x0", "garbage"] {
            let store = InMemoryStore::with_item(BALANCE_KEY, text);
            let wallet = controller(&store);

            assert_eq!(wallet.load()?, LoadOutcome::Seeded(1_000_000.0), "{text:?}");
            assert_eq!(stored(&store).as_deref(), Some("1000000"));
            assert_eq!(wallet.field().value(), "1000000");
        }
        Ok(())
    }

    #[test]
    fn load_restores_positive_balance_without_writing() -> Result<()> {
        let store = InMemoryStore::with_item(BALANCE_KEY, " 250 ");
        let wallet = controller(&store);

        assert_eq!(wallet.load()?, LoadOutcome::Restored(250.0));
        assert_eq!(wallet.field().value(), "250");
        assert_eq!(stored(&store).as_deref(), Some(" 250 "));
        Ok(())
    }

    #[test]
    fn commit_keeps_non_negative_input() -> Result<()> {
        let store = InMemoryStore::default();
        let wallet = controller(&store);
        wallet.load()?;

        for (typed, expected) in [("250", "250"), ("0", "0"), ("12.75", "12.75"), ("0042", "42")] {
            wallet.field().type_text(typed);
            let balance = wallet.commit()?;

            assert_eq!(balance.to_string(), expected);
            assert_eq!(wallet.field().value(), expected);
            assert_eq!(stored(&store).as_deref(), Some(expected));
        }
        Ok(())
    }

    #[test]
    fn commit_clamps_negative_input_to_zero() -> Result<()> {
        let store = InMemoryStore::default();
        let wallet = controller(&store);

        wallet.field().type_text("-5");
        assert_eq!(wallet.commit()?, Balance::ZERO);
        assert_eq!(wallet.field().value(), "0");
        assert_eq!(stored(&store).as_deref(), Some("0"));

        // committing the clamped value again is a no-op
        assert_eq!(wallet.commit()?, Balance::ZERO);
        assert_eq!(wallet.field().value(), "0");
        assert_eq!(stored(&store).as_deref(), Some("0"));
        Ok(())
    }

    #[test]
    fn commit_clamps_malformed_input_to_zero() -> Result<()> {
        let store = InMemoryStore::with_item(BALANCE_KEY, "300");
        let wallet = controller(&store);

        for typed in ["abc", "12abc", "-Infinity", "1e"] {
            wallet.field().type_text(typed);
            assert_eq!(wallet.commit()?, Balance::ZERO, "{typed:?}");
            assert_eq!(wallet.field().value(), "0");
            assert_eq!(stored(&store).as_deref(), Some("0"));
        }
        Ok(())
    }

    #[test]
    fn empty_input_commits_zero() -> Result<()> {
        let store = InMemoryStore::default();
        let wallet = controller(&store);

        wallet.field().type_text("");
        assert_eq!(wallet.commit()?, Balance::ZERO);
        assert_eq!(wallet.field().value(), "0");
        Ok(())
    }

    #[test]
    fn committed_zero_is_reseeded_on_next_load() -> Result<()> {
        let store = InMemoryStore::default();
        let wallet = controller(&store);

        wallet.field().type_text("0");
        wallet.commit()?;

        let reloaded = controller(&store);
        assert_eq!(reloaded.load()?, LoadOutcome::Seeded(1_000_000.0));
        Ok(())
    }

    #[test]
    fn fresh_origin_edit_session() -> Result<()> {
        let store = InMemoryStore::default();
        let wallet = controller(&store);

        wallet.load()?;
        assert_eq!(wallet.field().value(), "1000000");

        wallet.field().type_text("-5");
        wallet.commit()?;
        assert_eq!(wallet.field().value(), "0");
        assert_eq!(stored(&store).as_deref(), Some("0"));

        wallet.field().type_text("250");
        wallet.commit()?;
        assert_eq!(wallet.field().value(), "250");
        assert_eq!(stored(&store).as_deref(), Some("250"));

        // survives a reload
        let reloaded = controller(&store);
        assert_eq!(reloaded.load()?, LoadOutcome::Restored(250.0));
        assert_eq!(reloaded.field().value(), "250");
        Ok(())
    }

    #[test]
    fn clamped_balance_normalizes_negative_zero() {
        assert_eq!(Balance::clamped(-0.0).to_string(), "0");
        assert_eq!(Balance::clamped(f64::NAN), Balance::ZERO);
        assert_eq!(Balance::clamped(3.5).amount(), 3.5);
    }

    #[test]
    fn commit_keeps_positive_infinity() -> Result<()> {
        let store = InMemoryStore::default();
        let wallet = controller(&store);

        for typed in ["Infinity", "1e309"] {
            wallet.field().type_text(typed);
            assert_eq!(wallet.commit()?.amount(), f64::INFINITY, "{typed:?}");
            assert_eq!(wallet.field().value(), "Infinity");
            assert_eq!(stored(&store).as_deref(), Some("Infinity"));
        }

        let reloaded = controller(&store);
        assert_eq!(reloaded.load()?, LoadOutcome::Restored(f64::INFINITY));
        assert_eq!(reloaded.field().value(), "Infinity");
        Ok(())
    }

    #[test]
    fn failed_write_leaves_field_as_typed() {
        let wallet = WalletController::from_config(
            FailingStore::with_item(BALANCE_KEY, "300"),
            FakeField::default(),
            &HomeConfig::default(),
        );

        wallet.field().type_text("-5");
        assert!(wallet.commit().is_err());
        assert_eq!(wallet.field().value(), "-5");
    }

    #[test]
    fn failed_read_fails_load_without_touching_field() {
        let wallet = WalletController::from_config(
            FailingStore::unreadable(),
            FakeField::default(),
            &HomeConfig::default(),
        );

        assert!(wallet.load().is_err());
        assert_eq!(wallet.field().value(), "");
    }

    #[test]
    fn failed_seed_write_fails_load_without_touching_field() {
        let wallet = WalletController::from_config(
            FailingStore::default(),
            FakeField::default(),
            &HomeConfig::default(),
        );

        assert!(wallet.load().is_err());
        assert_eq!(wallet.field().value(), "");
    }
}
