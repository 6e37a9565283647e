use crate::domain::account::AccountId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Domain events recorded by the engine.
///
/// Events are part of the engine's observable surface: tests and the CLI
/// drain them after each operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    InvestmentAdded { investor: AccountId, amount: Decimal },
    InvestmentCancelled { investor: AccountId, amount: Decimal },
}
