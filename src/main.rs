use clap::Parser;
use issuance_engine::application::engine::IssuanceEngine;
use issuance_engine::domain::account::{AccountId, Amount};
use issuance_engine::error::{IssuanceError, Result as EngineResult};
use issuance_engine::infrastructure::in_memory::{InMemoryTokenLedger, InMemoryTreasury};
use issuance_engine::interfaces::csv::ledger_writer::LedgerWriter;
use issuance_engine::interfaces::csv::op_reader::{Op, OpKind, OpReader};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input issuance op script (CSV: op, caller, amount, to)
    input: PathBuf,

    /// Identity of the privileged owner account.
    #[arg(long, default_value = "owner")]
    owner: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let treasury = InMemoryTreasury::new();
    let minter = InMemoryTokenLedger::new();
    let mut engine = IssuanceEngine::new(
        AccountId::new(cli.owner),
        Box::new(treasury),
        Box::new(minter),
    );

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OpReader::new(file);
    for op_result in reader.ops() {
        match op_result {
            Ok(op) => {
                if let Err(e) = apply(&mut engine, op).await {
                    eprintln!("Error processing op: {}", e);
                }
                for event in engine.take_events() {
                    // Events go to stderr as JSON lines; stdout stays pure CSV.
                    match serde_json::to_string(&event) {
                        Ok(line) => eprintln!("{}", line),
                        Err(e) => eprintln!("Error encoding event: {}", e),
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading op: {}", e);
            }
        }
    }

    eprintln!("final state: {}", engine.state());
    eprintln!("total raised: {}", engine.total_raised());

    let stdout = io::stdout();
    let mut writer = LedgerWriter::new(stdout.lock());
    writer.write_ledger(engine.ledger()).into_diagnostic()?;

    Ok(())
}

async fn apply(engine: &mut IssuanceEngine, op: Op) -> EngineResult<()> {
    let caller = AccountId::new(op.caller);
    match op.op {
        OpKind::SetPrice => {
            let price = required_amount(op.amount)?;
            engine.set_issue_price(&caller, price)
        }
        OpKind::StartIssuance => engine.start_issuance(&caller),
        OpKind::Invest => {
            let amount = Amount::try_from(required_amount(op.amount)?)?;
            engine.invest(&caller, amount).await
        }
        OpKind::StartDistribution => engine.start_distribution(&caller),
        OpKind::Claim => engine.claim(&caller).await,
        OpKind::Withdraw => {
            let destination = op.to.ok_or(IssuanceError::Script("Missing destination."))?;
            engine.withdraw(&caller, AccountId::new(destination)).await
        }
        OpKind::CancelInvestment => engine.cancel_investment(&caller).await,
        OpKind::CancelAllInvestments => engine.cancel_all_investments(&caller),
    }
}

fn required_amount(amount: Option<Decimal>) -> EngineResult<Decimal> {
    amount.ok_or(IssuanceError::Script("Missing amount."))
}
