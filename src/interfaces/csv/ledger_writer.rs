use crate::domain::ledger::Ledger;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct LedgerRow<'a> {
    investor: &'a str,
    invested: Decimal,
}

/// Writes the final ledger as a CSV report.
///
/// Rows are sorted by investor id so the output is deterministic.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_ledger(&mut self, ledger: &Ledger) -> Result<()> {
        let mut rows: Vec<_> = ledger.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        for (investor, invested) in rows {
            self.writer.serialize(LedgerRow {
                investor: investor.as_str(),
                invested: *invested,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
