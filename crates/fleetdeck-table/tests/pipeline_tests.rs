// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdeck_table::{
    Column, DebouncedInput, FieldValue, FilterSpec, PageSpec, SortDirection, SortSpec, TableQuery,
    apply_filter, cycle_sort, paginate, run_query,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
struct Shipment {
    customer: String,
    status: &'static str,
    weight_kg: i64,
}

fn shipment(customer: &str, status: &'static str, weight_kg: i64) -> Shipment {
    Shipment {
        customer: customer.to_owned(),
        status,
        weight_kg,
    }
}

fn columns() -> Vec<Column<Shipment>> {
    vec![
        Column::new("customer", "Customer", |row: &Shipment| {
            FieldValue::text(row.customer.clone())
        })
        .searchable(),
        Column::new("status", "Status", |row: &Shipment| {
            FieldValue::text(row.status)
        }),
        Column::new("weight_kg", "Weight (kg)", |row: &Shipment| {
            FieldValue::Integer(row.weight_kg)
        }),
    ]
}

fn fixture(count: usize) -> Vec<Shipment> {
    (0..count)
        .map(|index| {
            let status = match index % 3 {
                0 => "scheduled",
                1 => "in_transit",
                _ => "delivered",
            };
            shipment(&format!("Customer {index:02}"), status, (index as i64) * 7)
        })
        .collect()
}

#[test]
fn empty_filter_spec_is_the_identity() {
    let records = fixture(9);
    let filtered = apply_filter(&records, &columns(), &FilterSpec::new());
    let round_trip: Vec<Shipment> = filtered.into_iter().cloned().collect();
    assert_eq!(round_trip, records);
}

#[test]
fn query_without_sort_preserves_source_order_across_pages() {
    let records = fixture(25);
    let columns = columns();

    let mut rebuilt = Vec::new();
    for index in 0..3 {
        let mut query = TableQuery::new();
        query.page = PageSpec::new(index, 10);
        rebuilt.extend(run_query(&records, &columns, &query).rows);
    }
    assert_eq!(rebuilt, records);
}

#[test]
fn sort_is_stable_for_duplicate_keys() {
    // All scheduled rows share the status key; sorting by status must not
    // disturb their relative order.
    let records = fixture(12);
    let columns = columns();

    let mut query = TableQuery::new();
    query.sort = Some(SortSpec::new("status", SortDirection::Asc));
    query.page = PageSpec::new(0, 12);
    let sorted = run_query(&records, &columns, &query);

    let scheduled: Vec<&Shipment> = sorted
        .rows
        .iter()
        .filter(|row| row.status == "scheduled")
        .collect();
    let original: Vec<&Shipment> = records
        .iter()
        .filter(|row| row.status == "scheduled")
        .collect();
    assert_eq!(scheduled, original);
}

#[test]
fn filtered_sorted_sequence_is_covered_exactly_once_by_its_pages() {
    let records = fixture(23);
    let columns = columns();

    let mut query = TableQuery::new();
    query.filter.set("status", FieldValue::text("in_transit"));
    query.sort = Some(SortSpec::new("weight_kg", SortDirection::Desc));
    query.page = PageSpec::new(0, 3);

    let first = run_query(&records, &columns, &query);
    let pages = first.page_count(3);
    let mut rebuilt = Vec::new();
    for index in 0..pages {
        query.page = PageSpec::new(index, 3);
        rebuilt.extend(run_query(&records, &columns, &query).rows);
    }

    assert_eq!(rebuilt.len(), first.total);
    let mut weights: Vec<i64> = rebuilt.iter().map(|row| row.weight_kg).collect();
    let mut expected = weights.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(weights, expected);
    weights.dedup();
    assert_eq!(weights.len(), rebuilt.len());
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let records = fixture(4);
    let refs: Vec<&Shipment> = records.iter().collect();
    let view = paginate(&refs, &PageSpec::new(9, 10));
    assert!(view.rows.is_empty());
    assert_eq!(view.total, 4);
}

#[test]
fn debounced_search_feeds_the_pipeline_once_quiet() {
    let records = vec![
        shipment("John Fowler", "scheduled", 10),
        shipment("Amy Reyes", "scheduled", 20),
    ];
    let columns = columns();
    let base = Instant::now();

    let mut input = DebouncedInput::new(Duration::from_millis(500));
    input.push("j", base);
    input.push("jh", base + Duration::from_millis(100));
    input.push("jhn", base + Duration::from_millis(200));

    assert_eq!(input.poll(base + Duration::from_millis(400)), None);
    let committed = input
        .poll(base + Duration::from_millis(700))
        .expect("quiescence reached");

    let mut query = TableQuery::new();
    query.search = committed;
    let view = run_query(&records, &columns, &query);
    assert_eq!(view.total, 1);
    assert_eq!(view.rows[0].customer, "John Fowler");
}

#[test]
fn sort_cycle_drives_the_query_back_to_source_order() {
    let records = fixture(6);
    let columns = columns();
    let mut query = TableQuery::new();

    cycle_sort(&mut query.sort, "weight_kg");
    cycle_sort(&mut query.sort, "weight_kg");
    let descending = run_query(&records, &columns, &query);
    assert_eq!(descending.rows[0].weight_kg, 35);

    cycle_sort(&mut query.sort, "weight_kg");
    assert!(query.sort.is_none());
    let untouched = run_query(&records, &columns, &query);
    assert_eq!(untouched.rows, records);
}
