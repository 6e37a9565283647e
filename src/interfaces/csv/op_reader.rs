use crate::error::{IssuanceError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One operation in a CSV issuance script.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    SetPrice,
    StartIssuance,
    Invest,
    StartDistribution,
    Claim,
    Withdraw,
    CancelInvestment,
    CancelAllInvestments,
}

/// A row of the op script: `op, caller, amount, to`.
///
/// `amount` is only meaningful for `set_price` and `invest`; `to` only for
/// `withdraw`. Missing trailing fields are accepted.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Op {
    pub op: OpKind,
    pub caller: String,
    pub amount: Option<Decimal>,
    pub to: Option<String>,
}

/// Reads issuance operations from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// yielding `Result<Op>` lazily so large scripts stream.
pub struct OpReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OpReader<R> {
    /// Creates a new `OpReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn ops(self) -> impl Iterator<Item = Result<Op>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(IssuanceError::from))
    }
}
