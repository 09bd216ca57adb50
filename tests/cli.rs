use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance-tracker").unwrap();
    cmd.env("FINANCE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_budget_overrun_prints_alert() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "set", "food", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 'food' set to $100.00"));

    tracker(&dir)
        .args(["add", "40", "food", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added successfully!"))
        .stdout(predicate::str::contains("ALERT").not());

    tracker(&dir)
        .args(["add", "70", "food", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ALERT: food spending (110.00) exceeds budget (100.00)",
        ));
}

#[test]
fn test_invalid_input_fails() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["budget", "set", "food", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid budget"));

    tracker(&dir)
        .args(["budget", "set", "rent", "$-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid budget"));

    tracker(&dir)
        .args(["add", "abc10", "food", "lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    tracker(&dir)
        .args(["add", "5", "food", "lunch", "--kind", "gift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("income"));

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_list_and_check() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "1500", "salary", "march pay", "--kind", "income"])
        .assert()
        .success();
    tracker(&dir)
        .args(["budget", "set", "rent", "900"])
        .assert()
        .success();
    tracker(&dir)
        .args(["add", "950", "rent", "april rent"])
        .assert()
        .success();

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income - $1500.00 - salary - march pay"))
        .stdout(predicate::str::contains("Expense - $950.00 - rent - april rent"));

    // Each invocation is a fresh session, so the overrun is reported again
    tracker(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ALERT: rent spending (950.00) exceeds budget (900.00)",
        ));
}

#[test]
fn test_clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["add", "12", "food", "snack"])
        .assert()
        .success();

    tracker(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    tracker(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 transaction(s)."));

    tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_export_report() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.csv");

    tracker(&dir)
        .args(["add", "25", "travel", "bus pass"])
        .assert()
        .success();

    tracker(&dir)
        .arg("export")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with("Category,Income,Expenses,Budget,Remaining,Over Budget"));
    assert!(contents.contains("travel"));
}

#[test]
fn test_config_enables_alert_log() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["config", "--notify", "on", "--recipient", "me@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    tracker(&dir)
        .args(["budget", "set", "fun", "10"])
        .assert()
        .success();
    tracker(&dir)
        .args(["add", "11", "fun", "cinema"])
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join("alerts.log")).unwrap();
    assert!(log.contains("me@example.com"));
    assert!(log.contains("ALERT: fun spending (11.00) exceeds budget (10.00)"));
}

#[test]
fn test_menu_exit() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add Transaction"))
        .stdout(predicate::str::contains(
            "Thank you for using Personal Finance Tracker!",
        ));
}

#[test]
fn test_menu_add_and_view() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\n30\nbooks\nnovel\nexpense\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense - $30.00 - books - novel"));
}
