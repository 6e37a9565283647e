use crate::domain::account::AccountId;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Per-investor accumulated contributions, in base value units.
///
/// The ledger is owned exclusively by the engine; every mutation goes through
/// an engine operation. At rest the sum of entries equals the value the
/// engine has custodied and not yet swept.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    entries: HashMap<AccountId, Decimal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the investor's entry, creating it if absent.
    pub fn credit(&mut self, investor: AccountId, amount: Decimal) {
        *self.entries.entry(investor).or_insert(Decimal::ZERO) += amount;
    }

    /// Removes and returns the investor's entry if it is non-zero.
    pub fn take(&mut self, investor: &AccountId) -> Option<Decimal> {
        match self.entries.remove(investor) {
            Some(amount) if amount > Decimal::ZERO => Some(amount),
            _ => None,
        }
    }

    /// The investor's current entry, zero if absent.
    pub fn invested(&self, investor: &AccountId) -> Decimal {
        self.entries.get(investor).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of all entries.
    pub fn total(&self) -> Decimal {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Decimal)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
