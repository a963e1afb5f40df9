use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

fn script_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_core_cli").unwrap();
    cmd.env("EXPENSE_CORE_HOME", home)
        .env("EXPENSE_CORE_CLI_SCRIPT", "1")
        .env_remove("EXPENSE_CORE_TEST_CONFIRMS");
    cmd
}

#[test]
fn script_mode_records_and_lists_expenses() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("add 12.50 Food 2024-03-15 lunch\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("No data file found; starting a fresh ledger."))
        .stdout(contains("Expense added (id 1)."))
        .stdout(contains("lunch"))
        .stdout(contains("Saved 1 records"));

    let data = fs::read_to_string(home.path().join("expenses.dat")).unwrap();
    assert_eq!(data, "2\n1\n12.5\n3\n2024\n3\n15\nlunch\n");
}

#[test]
fn ledger_survives_across_processes() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("add 5.00 Transportation 2024-03-10 bus\nexit\n")
        .assert()
        .success();

    script_command(home.path())
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(contains("Loaded 1 records"))
        .stdout(contains("bus"));
}

#[test]
fn scripted_confirms_cancel_then_delete() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .env("EXPENSE_CORE_TEST_CONFIRMS", "n|y")
        .write_stdin("add 9.99 Other 2024-01-01 gift\ndelete 1\ndelete 1\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."))
        .stdout(contains("Record 1 deleted."))
        .stdout(contains("No records yet."));
}

#[test]
fn add_without_arguments_reports_usage_in_script_mode() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("add\nexit\n")
        .assert()
        .success()
        .stdout(contains("usage: add <amount> <category> <YYYY-MM-DD> [remarks...]"))
        .stdout(contains("Use `help <command>` for usage details."));
}

#[test]
fn unknown_command_suggests_nearest_name() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin("lst\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `lst`."))
        .stdout(contains("Suggestion: `list`?"));
}

#[test]
fn data_file_argument_overrides_default_location() {
    let home = tempdir().unwrap();
    let custom = home.path().join("books").join("personal.dat");
    fs::create_dir_all(custom.parent().unwrap()).unwrap();

    script_command(home.path())
        .arg(&custom)
        .write_stdin("add 3.00 Food 2024-02-01 tea\nexit\n")
        .assert()
        .success();

    assert!(custom.exists(), "records belong in the override file");
    assert!(
        !home.path().join("expenses.dat").exists(),
        "default location stays untouched"
    );
}

#[test]
fn corrupt_data_file_starts_empty_and_is_rewritten_on_exit() {
    let home = tempdir().unwrap();
    fs::create_dir_all(home.path()).unwrap();
    fs::write(
        home.path().join("expenses.dat"),
        "2\n1\ntwelve\n3\n2024\n3\n15\nlunch\n",
    )
    .unwrap();

    script_command(home.path())
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(contains("Could not read"))
        .stdout(contains("Starting with an empty ledger"))
        .stdout(contains("No records yet."));

    let rewritten = fs::read_to_string(home.path().join("expenses.dat")).unwrap();
    assert_eq!(rewritten, "1\n");
}

#[test]
fn stats_render_totals_and_breakdown() {
    let home = tempdir().unwrap();

    script_command(home.path())
        .write_stdin(
            "add 12.50 Food 2024-03-15 lunch\n\
             add 5.00 Transportation 2024-03-10 bus\n\
             stats\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("Total spent: 17.50"))
        .stdout(contains("Records: 2"))
        .stdout(contains("Average per record: 8.75"))
        .stdout(contains("Top category: Food (12.50)"))
        .stdout(contains("Largest single expense: 12.50 (Food, 2024-03-15)"));
}
