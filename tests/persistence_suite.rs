use expense_core::{
    core::LedgerManager,
    ledger::{CalendarDate, Category, Ledger},
    storage,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// The store stages rewrites next to the target under the same name plus
// a `.tmp` suffix.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().expect("data file name").to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.dat");

    let mut ledger = Ledger::new();
    ledger.add(
        42.0,
        Category::Food,
        CalendarDate::new(2025, 1, 1),
        "groceries",
    );
    storage::save(&path, &ledger).expect("initial save");
    let original = fs::read_to_string(&path).expect("read original file");

    // A directory squatting on the staging name forces File::create to fail.
    let tmp_path = tmp_path_for(&path);
    fs::create_dir_all(&tmp_path).unwrap();

    ledger.add(
        99.0,
        Category::Other,
        CalendarDate::new(2025, 1, 2),
        "would be lost",
    );
    let result = storage::save(&path, &ledger);
    assert!(
        result.is_err(),
        "expected save to fail when the staging path is a directory"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not touch the original file"
    );
}

#[test]
fn full_session_round_trip_via_manager() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.dat");

    let mut manager = LedgerManager::new(&path);
    manager.load();
    manager.add(
        12.5,
        Category::Food,
        CalendarDate::new(2024, 3, 15),
        "lunch with the team",
    );
    manager.add(
        0.30000000000000004,
        Category::Other,
        CalendarDate::new(2024, 3, 16),
        "午饭",
    );
    manager.save().expect("save session");

    let mut reloaded = LedgerManager::new(&path);
    let report = reloaded.load();
    assert!(report.found);
    assert!(report.warnings.is_empty());
    assert!(report.error.is_none());

    let records = reloaded.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].remarks, "lunch with the team");
    assert_eq!(records[0].date, CalendarDate::new(2024, 3, 15));
    // f64 Display output parses back to the identical value.
    assert_eq!(records[1].amount, 0.30000000000000004);
    assert_eq!(records[1].remarks, "午饭");
    assert_eq!(reloaded.next_id(), 3);
}

#[test]
fn damaged_allocator_line_discards_file_with_warning() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.dat");
    fs::write(&path, "not-a-counter\n1\n12.5\n3\n2024\n3\n15\nlunch\n").unwrap();

    let mut manager = LedgerManager::new(&path);
    let report = manager.load();
    assert!(!report.found, "unreadable allocator means first-run state");
    assert!(report.error.is_none());
    assert_eq!(report.warnings.len(), 1);
    assert!(manager.records().is_empty());
    assert_eq!(manager.next_id(), 1);
}

#[test]
fn validation_misses_surface_as_report_warnings() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.dat");
    // Record 1 has month 13; record 2 is intact.
    fs::write(
        &path,
        "3\n1\n8.0\n0\n2024\n13\n5\npens\n2\n4.5\n2\n2024\n4\n1\nbus\n",
    )
    .unwrap();

    let mut manager = LedgerManager::new(&path);
    let report = manager.load();
    assert!(report.found);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("record id 1"));
    assert_eq!(manager.records().len(), 1);
    assert_eq!(manager.records()[0].id, 2);
    // The stored counter is trusted even after skips.
    assert_eq!(manager.next_id(), 3);
}

#[test]
fn corrupt_field_fails_load_and_next_save_rewrites() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.dat");
    fs::write(&path, "2\n1\ntwelve\n3\n2024\n3\n15\nlunch\n").unwrap();

    let mut manager = LedgerManager::new(&path);
    let report = manager.load();
    assert!(report.error.is_some());
    assert!(manager.records().is_empty());

    manager.save().expect("rewrite after corrupt load");
    let rewritten = fs::read_to_string(&path).unwrap();
    assert_eq!(rewritten, "1\n");
}
