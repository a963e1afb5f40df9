use expense_core::ledger::{CalendarDate, Category, Ledger};

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add(
        12.5,
        Category::Food,
        CalendarDate::new(2024, 3, 15),
        "lunch",
    );
    ledger.add(5.0, Category::Transportation, CalendarDate::new(2024, 3, 10), "");
    ledger
}

#[test]
fn ids_start_at_one_and_increment() {
    let ledger = sample_ledger();
    let ids: Vec<u32> = ledger.records.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(ledger.next_id, 3);
}

#[test]
fn deleted_ids_are_never_reissued() {
    let mut ledger = sample_ledger();
    ledger.add(7.0, Category::Other, CalendarDate::new(2024, 3, 20), "c");
    assert!(ledger.delete(2));
    assert_eq!(
        ledger.add(1.0, Category::Food, CalendarDate::new(2024, 3, 21), "d"),
        4
    );
    assert!(ledger.find(2).is_none());
}

#[test]
fn delete_of_unknown_id_is_a_no_op() {
    let mut ledger = sample_ledger();
    assert!(!ledger.delete(99));
    assert_eq!(ledger.records.len(), 2);
    assert_eq!(ledger.next_id, 3);
}

#[test]
fn sort_by_date_orders_ascending_and_is_idempotent() {
    let mut ledger = sample_ledger();
    ledger.sort_by_date();
    let ids: Vec<u32> = ledger.records.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![2, 1], "older record moves first");

    ledger.sort_by_date();
    let again: Vec<u32> = ledger.records.iter().map(|record| record.id).collect();
    assert_eq!(again, vec![2, 1], "second sort changes nothing");
}

#[test]
fn equal_sort_keys_keep_insertion_order() {
    let mut ledger = Ledger::new();
    let date = CalendarDate::new(2024, 6, 1);
    ledger.add(3.0, Category::Food, date, "first");
    ledger.add(3.0, Category::Other, date, "second");
    ledger.add(3.0, Category::Food, date, "third");

    ledger.sort_by_date();
    let by_date: Vec<&str> = ledger
        .records
        .iter()
        .map(|record| record.remarks.as_str())
        .collect();
    assert_eq!(by_date, vec!["first", "second", "third"]);

    ledger.sort_by_amount();
    let by_amount: Vec<&str> = ledger
        .records
        .iter()
        .map(|record| record.remarks.as_str())
        .collect();
    assert_eq!(by_amount, vec!["first", "second", "third"]);
}

#[test]
fn statistics_match_worked_example() {
    let ledger = sample_ledger();
    let stats = ledger.statistics().expect("two records present");

    assert_eq!(stats.total, 17.5);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.average, 8.75);
    assert_eq!(stats.max_category, Category::Food);
    assert_eq!(stats.max_single.id, 1);

    // Only the touched categories appear, in declaration order.
    let listed: Vec<Category> = stats
        .per_category
        .iter()
        .map(|(category, _)| *category)
        .collect();
    assert_eq!(listed, vec![Category::Transportation, Category::Food]);
}

#[test]
fn statistics_ties_resolve_to_earliest() {
    let mut ledger = Ledger::new();
    let date = CalendarDate::new(2024, 1, 1);
    ledger.add(5.0, Category::Food, date, "a");
    ledger.add(5.0, Category::LearningSupplies, date, "b");

    let stats = ledger.statistics().unwrap();
    // Equal sums: the earliest declared category wins.
    assert_eq!(stats.max_category, Category::LearningSupplies);
    // Equal amounts: the first record in current order wins.
    assert_eq!(stats.max_single.remarks, "a");
}

#[test]
fn statistics_breakdown_sums_match_totals() {
    let mut ledger = Ledger::new();
    let date = CalendarDate::new(2024, 5, 1);
    // Quarter amounts are exact in f64, so the sums compare exactly.
    ledger.add(1.25, Category::Food, date, "");
    ledger.add(2.50, Category::Food, date, "");
    ledger.add(0.75, Category::Transportation, date, "");
    ledger.add(10.00, Category::LearningSupplies, date, "");

    let stats = ledger.statistics().unwrap();
    let breakdown_sum: f64 = stats.per_category.iter().map(|(_, totals)| totals.sum).sum();
    let breakdown_count: usize = stats.per_category.iter().map(|(_, totals)| totals.count).sum();
    assert_eq!(breakdown_sum, stats.total);
    assert_eq!(breakdown_count, stats.count);
    assert_eq!(stats.count, 4);
}

#[test]
fn statistics_empty_ledger_is_none() {
    assert!(Ledger::new().statistics().is_none());
}

#[test]
fn remarks_newlines_are_flattened_on_add() {
    let mut ledger = Ledger::new();
    ledger.add(
        1.0,
        Category::Other,
        CalendarDate::new(2024, 1, 1),
        "taxi\nhome\r\nlate\rnight",
    );
    assert_eq!(ledger.records[0].remarks, "taxi home late night");
}

#[test]
fn calendar_date_validity_covers_leap_rules_and_bounds() {
    assert!(CalendarDate::new(2024, 2, 29).is_valid());
    assert!(CalendarDate::new(2000, 2, 29).is_valid());
    assert!(!CalendarDate::new(1900, 2, 29).is_valid());
    assert!(!CalendarDate::new(2023, 2, 29).is_valid());

    assert!(CalendarDate::new(1900, 1, 1).is_valid());
    assert!(CalendarDate::new(2100, 12, 31).is_valid());
    assert!(!CalendarDate::new(1899, 12, 31).is_valid());
    assert!(!CalendarDate::new(2101, 1, 1).is_valid());

    assert!(!CalendarDate::new(2024, 0, 1).is_valid());
    assert!(!CalendarDate::new(2024, 13, 1).is_valid());
    assert!(!CalendarDate::new(2024, 4, 31).is_valid());
    assert!(!CalendarDate::new(2024, 1, 0).is_valid());
}

#[test]
fn calendar_date_orders_lexicographically() {
    let a = CalendarDate::new(2023, 12, 31);
    let b = CalendarDate::new(2024, 1, 1);
    let c = CalendarDate::new(2024, 1, 2);
    assert!(a < b && b < c);
    assert_eq!(b.to_string(), "2024-01-01");
}

#[test]
fn category_parse_accepts_labels_and_wire_indices() {
    assert_eq!(Category::parse("Transportation"), Some(Category::Transportation));
    assert_eq!(Category::parse("learning supplies"), Some(Category::LearningSupplies));
    assert_eq!(Category::parse("4"), Some(Category::Other));
    assert_eq!(Category::parse("5"), None);
    assert_eq!(Category::parse("snacks"), None);
    assert_eq!(Category::label_for_index(9), "unknown category");
}
