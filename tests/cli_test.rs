use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_open_issuance_reports_ledger() {
    let script = common::write_script(&[
        "set_price, owner, 0.05, ",
        "start_issuance, owner, , ",
        "invest, investor1, 0.5, ",
        "invest, investor2, 0.1, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("investor,invested"))
        .stdout(predicate::str::contains("investor1,0.5"))
        .stdout(predicate::str::contains("investor2,0.1"))
        .stderr(predicate::str::contains("final state: OPEN"))
        .stderr(predicate::str::contains("total raised: 0.6"));
}

#[test]
fn test_cli_emits_investment_events() {
    let script = common::write_script(&[
        "set_price, owner, 0.05, ",
        "start_issuance, owner, , ",
        "invest, investor1, 0.5, ",
        "cancel_investment, investor1, , ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            r#"{"event":"investment_added","investor":"investor1","amount":"0.5"}"#,
        ))
        .stderr(predicate::str::contains(
            r#"{"event":"investment_cancelled","investor":"investor1","amount":"0.5"}"#,
        ));
}

#[test]
fn test_cli_full_distribution_drains_ledger() {
    let script = common::write_script(&[
        "set_price, owner, 0.05, ",
        "start_issuance, owner, , ",
        "invest, investor1, 0.5, ",
        "invest, investor2, 0.1, ",
        "start_distribution, owner, , ",
        "claim, investor1, , ",
        "claim, investor2, , ",
        "withdraw, owner, , wallet",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    // All entries claimed: the report is empty and nothing is left raised.
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("final state: LIVE"))
        .stderr(predicate::str::contains("total raised: 0"));
}

#[test]
fn test_cli_reports_op_errors_and_continues() {
    let script = common::write_script(&[
        "set_price, owner, 0.05, ",
        "start_issuance, owner, , ",
        "invest, investor1, 0.5001, ",
        "invest, investor1, 0.5, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("investor1,0.5"))
        .stderr(predicate::str::contains("Fractional investments not allowed."));
}

#[test]
fn test_cli_custom_owner_identity() {
    let script = common::write_script(&[
        "set_price, alice, 0.05, ",
        "set_price, owner, 0.05, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("issuance-engine"));
    cmd.arg(script.path()).arg("--owner").arg("alice");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Caller is not the owner."));
}
