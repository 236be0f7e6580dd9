use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn prorata(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prorata").unwrap();
    cmd.env("PRORATA_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn set_budget(data_dir: &TempDir, month: &str, amount: &str) {
    prorata(data_dir)
        .args(["budget", "set", month, amount])
        .assert()
        .success();
}

#[test]
fn init_creates_files() {
    let data_dir = TempDir::new().unwrap();

    prorata(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("budgets.json").exists());
}

#[test]
fn total_with_no_budgets_is_zero() {
    let data_dir = TempDir::new().unwrap();

    prorata(&data_dir)
        .args(["total", "2000-04-01", "2000-04-01"])
        .assert()
        .success()
        .stdout("0.00\n");
}

#[test]
fn total_across_three_months() {
    let data_dir = TempDir::new().unwrap();
    set_budget(&data_dir, "200003", "31");
    set_budget(&data_dir, "200004", "300");
    set_budget(&data_dir, "2000-05", "3100");

    prorata(&data_dir)
        .args(["total", "2000-03-30", "2000-05-10"])
        .assert()
        .success()
        .stdout("1302.00\n");
}

#[test]
fn total_with_inverted_range_is_zero() {
    let data_dir = TempDir::new().unwrap();
    set_budget(&data_dir, "200004", "30");

    prorata(&data_dir)
        .args(["total", "2000-04-30", "2000-04-01"])
        .assert()
        .success()
        .stdout("0.00\n");
}

#[test]
fn total_breakdown_lists_months() {
    let data_dir = TempDir::new().unwrap();
    set_budget(&data_dir, "200004", "300");

    prorata(&data_dir)
        .args(["total", "2000-03-30", "2000-04-02", "--breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("200004"))
        .stdout(predicate::str::ends_with("20.00\n"));
}

#[test]
fn total_rejects_bad_date() {
    let data_dir = TempDir::new().unwrap();

    prorata(&data_dir)
        .args(["total", "2000-04-31", "2000-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn set_replaces_existing_month() {
    let data_dir = TempDir::new().unwrap();
    set_budget(&data_dir, "200004", "30");

    prorata(&data_dir)
        .args(["budget", "set", "200004", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30.00 -> 300.00"));

    prorata(&data_dir)
        .args(["total", "2000-04-01", "2000-04-01"])
        .assert()
        .success()
        .stdout("10.00\n");
}

#[test]
fn set_rejects_malformed_month() {
    let data_dir = TempDir::new().unwrap();

    prorata(&data_dir)
        .args(["budget", "set", "200013", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid year-month: 200013"));
}

#[test]
fn remove_and_list() {
    let data_dir = TempDir::new().unwrap();
    set_budget(&data_dir, "200004", "300");
    set_budget(&data_dir, "200003", "31");

    prorata(&data_dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2000"))
        .stdout(predicate::str::contains("April 2000"));

    prorata(&data_dir)
        .args(["budget", "remove", "200004"])
        .assert()
        .success();

    prorata(&data_dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("April 2000").not());

    prorata(&data_dir)
        .args(["budget", "remove", "200004"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget not found: 200004"));
}

#[test]
fn import_then_export_csv() {
    let data_dir = TempDir::new().unwrap();
    let csv_path = data_dir.path().join("budgets.csv");
    std::fs::write(&csv_path, "month,amount\n200003,31\n200004,300\nnope,1\n").unwrap();

    prorata(&data_dir)
        .args(["budget", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 budget(s)"))
        .stdout(predicate::str::contains("line 4"));

    let out_path = data_dir.path().join("export.csv");
    prorata(&data_dir)
        .arg("export")
        .arg(&out_path)
        .args(["--format", "csv"])
        .assert()
        .success();

    let exported = std::fs::read_to_string(out_path).unwrap();
    assert!(exported.starts_with("month,amount,days,daily_amount\n200003,31,31,1\n"));
}

#[test]
fn custom_date_format_from_settings() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"date_format": "%d/%m/%Y", "decimal_places": 0}"#,
    )
    .unwrap();
    set_budget(&data_dir, "200004", "300");

    prorata(&data_dir)
        .args(["total", "30/03/2000", "02/04/2000"])
        .assert()
        .success()
        .stdout("20\n");
}
