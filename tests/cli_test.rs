mod common;

use predicates::prelude::*;

#[test]
fn test_cli_purchase_end_to_end() {
    common::session("1 100\n1 50\n2 1\n3\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Input amount]\t\t\t150 JPY"))
        .stdout(predicate::str::contains(
            "1. Canned Coffee\t\t120 JPY\t\t\tAvailable for purchase",
        ))
        .stdout(predicate::str::contains("GOT Items: Canned Coffee"))
        .stdout(predicate::str::contains(
            "GOT Changes: 10 JPY, 10 JPY, 10 JPY",
        ))
        .stderr(predicate::str::contains("ERR:").not());
}

#[test]
fn test_cli_prints_initial_panel_and_exits_on_eof() {
    common::session("")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Input amount]\t\t\t0 JPY"))
        .stdout(predicate::str::contains("[Change]\t\t\t\t100 JPY\t\t\tChange"))
        .stdout(predicate::str::contains(
            "2. Water PET bottle\t\t100 JPY\t\t\tSold out",
        ))
        .stdout(predicate::str::contains("[Outlet]\t\t\t\tEmpty"));
}

#[test]
fn test_cli_quiet_skips_panel_after_commands() {
    let output = common::session("1 10\n1 10\n")
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("[Input amount]").count(), 1);
}
