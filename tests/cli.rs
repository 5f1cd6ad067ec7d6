use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn splitledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("splitledger").unwrap();
    cmd.env("SPLITLEDGER_DATA_DIR", data_dir.path())
        .env_remove("SPLITLEDGER_LOG");
    cmd
}

fn run(data_dir: &TempDir, args: &[&str]) {
    splitledger(data_dir).args(args).assert().success();
}

fn setup_trip(data_dir: &TempDir) {
    run(data_dir, &["init"]);
    run(data_dir, &["participant", "add", "A", "B", "C"]);
    run(data_dir, &["group", "create", "trip", "A", "B", "C"]);
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    splitledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("participants.json").exists());
}

#[test]
fn exact_expense_settles_to_payer() {
    let dir = TempDir::new().unwrap();
    setup_trip(&dir);

    run(
        &dir,
        &[
            "expense", "add", "trip", "--payer", "C", "--amount", "0.50", "--split", "exact",
            "--share", "A=0.30", "--share", "B=0.20",
        ],
    );

    splitledger(&dir)
        .args(["balances", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$0.30"))
        .stdout(predicate::str::contains("$0.50"));

    splitledger(&dir)
        .args(["settle", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C: $0.30"))
        .stdout(predicate::str::contains("B -> C: $0.20"))
        .stdout(predicate::str::contains("2 transfers"));
}

#[test]
fn equal_expense_lists_splits() {
    let dir = TempDir::new().unwrap();
    setup_trip(&dir);

    run(
        &dir,
        &["expense", "add", "trip", "-p", "A", "-a", "100", "-d", "Dinner"],
    );

    splitledger(&dir)
        .args(["expense", "list", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("EQUAL"))
        .stdout(predicate::str::contains("$33.34"))
        .stdout(predicate::str::contains("$33.33"));
}

#[test]
fn mismatched_percentages_are_rejected() {
    let dir = TempDir::new().unwrap();
    setup_trip(&dir);

    splitledger(&dir)
        .args([
            "expense", "add", "trip", "--payer", "A", "--amount", "100", "--split", "percent",
            "--share", "A=50", "--share", "B=30", "--share", "C=19",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PERCENT split does not reconcile"));

    splitledger(&dir)
        .args(["expense", "list", "trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn unknown_policy_and_participant_fail() {
    let dir = TempDir::new().unwrap();
    setup_trip(&dir);

    splitledger(&dir)
        .args(["expense", "add", "trip", "-p", "A", "-a", "10", "-s", "shares"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid split policy"));

    splitledger(&dir)
        .args(["expense", "add", "trip", "-p", "Zed", "-a", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown participant: Zed"));
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    setup_trip(&dir);
    run(
        &dir,
        &["expense", "add", "trip", "-p", "B", "-a", "30"],
    );

    let output = splitledger(&dir)
        .args(["export", "trip", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["group"], "trip");
    assert_eq!(value["transfers"].as_array().unwrap().len(), 2);
    assert_eq!(value["transfers"][0]["to"]["name"], "B");
}

#[test]
fn debts_report_spans_groups() {
    let dir = TempDir::new().unwrap();
    setup_trip(&dir);
    run(&dir, &["group", "create", "flat", "A", "B"]);
    run(&dir, &["expense", "add", "flat", "-p", "A", "-a", "10"]);

    splitledger(&dir)
        .arg("debts")
        .assert()
        .success()
        .stdout(predicate::str::contains("B owes A $5.00"));
}

#[test]
fn bulk_participant_add_is_all_or_nothing() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["init"]);
    run(&dir, &["participant", "add", "A"]);

    splitledger(&dir)
        .args(["participant", "add", "B", "a", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    splitledger(&dir)
        .args(["participant", "add", "B", "C", "--phone", "555-0101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single name"));

    splitledger(&dir)
        .args(["participant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B").not());
}
