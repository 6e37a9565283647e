use crate::domain::account::AccountId;
use crate::domain::ports::{TokenMint, ValueTransfer};
use crate::error::{IssuanceError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory value-transfer capability.
///
/// Tracks the custodied total plus per-account payout balances behind
/// `Arc<RwLock<..>>`, so a cloned handle observes refunds and sweeps while
/// the engine owns a boxed copy.
#[derive(Default, Clone)]
pub struct InMemoryTreasury {
    held: Arc<RwLock<Decimal>>,
    accounts: Arc<RwLock<HashMap<AccountId, Decimal>>>,
}

impl InMemoryTreasury {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value paid out to `account` so far.
    pub async fn balance_of(&self, account: &AccountId) -> Decimal {
        let accounts = self.accounts.read().await;
        accounts.get(account).copied().unwrap_or(Decimal::ZERO)
    }

    /// The currently custodied total, for assertions outside the port.
    pub async fn custodied_now(&self) -> Decimal {
        *self.held.read().await
    }
}

#[async_trait]
impl ValueTransfer for InMemoryTreasury {
    async fn receive(&self, _from: AccountId, amount: Decimal) -> Result<()> {
        let mut held = self.held.write().await;
        *held += amount;
        Ok(())
    }

    async fn transfer(&self, to: AccountId, amount: Decimal) -> Result<()> {
        let mut held = self.held.write().await;
        if *held < amount {
            return Err(IssuanceError::Capability(format!(
                "insufficient custodied value: have {}, need {}",
                *held, amount
            )));
        }
        *held -= amount;
        let mut accounts = self.accounts.write().await;
        *accounts.entry(to).or_insert(Decimal::ZERO) += amount;
        Ok(())
    }

    async fn custodied(&self) -> Result<Decimal> {
        Ok(*self.held.read().await)
    }
}

/// An in-memory token ledger implementing the mint capability.
///
/// `rejecting()` builds a variant whose mint always fails, for exercising the
/// engine's rollback behavior.
#[derive(Default, Clone)]
pub struct InMemoryTokenLedger {
    balances: Arc<RwLock<HashMap<AccountId, Decimal>>>,
    reject_mints: bool,
}

impl InMemoryTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            balances: Arc::default(),
            reject_mints: true,
        }
    }

    pub async fn balance_of(&self, account: &AccountId) -> Decimal {
        let balances = self.balances.read().await;
        balances.get(account).copied().unwrap_or(Decimal::ZERO)
    }

    pub async fn total_supply(&self) -> Decimal {
        let balances = self.balances.read().await;
        balances.values().sum()
    }
}

#[async_trait]
impl TokenMint for InMemoryTokenLedger {
    async fn mint(&self, to: AccountId, tokens: Decimal) -> Result<()> {
        if self.reject_mints {
            return Err(IssuanceError::Capability("mint rejected".to_string()));
        }
        let mut balances = self.balances.write().await;
        *balances.entry(to).or_insert(Decimal::ZERO) += tokens;
        Ok(())
    }
}
