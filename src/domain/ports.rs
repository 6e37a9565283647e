use super::account::AccountId;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// The value-transfer capability of the host ledger.
///
/// The engine custodies contributed value through this port and never touches
/// balances directly, so its correctness can be verified against a mock.
#[async_trait]
pub trait ValueTransfer: Send + Sync {
    /// Takes `amount` from `from` into the engine's custody.
    async fn receive(&self, from: AccountId, amount: Decimal) -> Result<()>;
    /// Pays `amount` out of the engine's custody to `to`.
    async fn transfer(&self, to: AccountId, amount: Decimal) -> Result<()>;
    /// The value currently held in the engine's custody.
    async fn custodied(&self) -> Result<Decimal>;
}

/// The token-issuance capability.
///
/// The engine must be authorized as a minter by the token collaborator before
/// use; that grant happens outside this crate.
#[async_trait]
pub trait TokenMint: Send + Sync {
    async fn mint(&self, to: AccountId, tokens: Decimal) -> Result<()>;
}

pub type ValueTransferBox = Box<dyn ValueTransfer>;
pub type TokenMintBox = Box<dyn TokenMint>;
