use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_issuance_cannot_open_without_price() {
    let script = common::write_script(&[
        "set_price, owner, 0, ",
        "start_issuance, owner, , ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Issue price not set."))
        .stderr(predicate::str::contains("final state: CREATED"));
}

#[test]
fn test_failed_issuance_refunds_everyone() {
    let script = common::write_script(&[
        "set_price, owner, 0.05, ",
        "start_issuance, owner, , ",
        "invest, investor1, 0.5, ",
        "invest, investor2, 0.1, ",
        "cancel_all_investments, owner, , ",
        "cancel_investment, investor1, , ",
        "cancel_investment, investor2, , ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    // Every entry refunded individually: ledger report empty, nothing raised.
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("final state: FAILED"))
        .stderr(predicate::str::contains("total raised: 0"));
}

#[test]
fn test_cancel_all_keeps_ledger_until_individual_cancels() {
    let script = common::write_script(&[
        "set_price, owner, 0.05, ",
        "start_issuance, owner, , ",
        "invest, investor1, 0.5, ",
        "cancel_all_investments, owner, , ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("investor1,0.5"))
        .stderr(predicate::str::contains("final state: FAILED"))
        .stderr(predicate::str::contains("total raised: 0.5"));
}

#[test]
fn test_no_way_back_from_live() {
    let script = common::write_script(&[
        "set_price, owner, 0.05, ",
        "start_issuance, owner, , ",
        "invest, investor1, 0.5, ",
        "start_distribution, owner, , ",
        "invest, investor2, 0.1, ",
        "cancel_investment, investor1, , ",
        "cancel_all_investments, owner, , ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Not open for investments."))
        .stderr(predicate::str::contains("Cannot cancel now."))
        .stderr(predicate::str::contains("Cannot cancel all investments now."))
        .stderr(predicate::str::contains("final state: LIVE"));
}
