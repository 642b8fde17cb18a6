// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdeck_app::{
    FormPayload, ListScreen, Trip, TripFormInput, TripId, TripStatus, trip_columns,
};
use fleetdeck_table::FieldValue;
use time::PrimitiveDateTime;
use time::macros::datetime;

fn trip(
    id: i64,
    vehicle: &str,
    driver: &str,
    route: (&str, &[&str], &str),
    times: (PrimitiveDateTime, PrimitiveDateTime),
    status: TripStatus,
    distance_km: i64,
    notes: &str,
) -> Trip {
    let (start_location, stops, end_location) = route;
    Trip {
        id: TripId::new(id),
        vehicle: vehicle.to_owned(),
        driver: driver.to_owned(),
        start_location: start_location.to_owned(),
        stops: stops.iter().map(|stop| (*stop).to_owned()).collect(),
        end_location: end_location.to_owned(),
        start_time: times.0,
        end_time: times.1,
        status,
        distance_km,
        notes: notes.to_owned(),
    }
}

/// The four trips the dashboard ships as mock data.
fn demo_trips() -> Vec<Trip> {
    vec![
        trip(
            1,
            "ABC-1234",
            "Veronica Herman",
            ("Paris, France", &["Lyon, France", "Zurich, Switzerland"], "Rome, Italy"),
            (datetime!(2024-07-01 08:00), datetime!(2024-07-01 20:00)),
            TripStatus::Active,
            1_420,
            "Multi-stop delivery route",
        ),
        trip(
            2,
            "XYZ-5678",
            "Frank Jones",
            ("Berlin, Germany", &["Hamburg, Germany"], "Amsterdam, Netherlands"),
            (datetime!(2024-07-02 09:00), datetime!(2024-07-02 18:30)),
            TripStatus::Completed,
            650,
            "Delivered on time",
        ),
        trip(
            3,
            "JKL-9101",
            "Helen Jacobs",
            ("Madrid, Spain", &[], "Valencia, Spain"),
            (datetime!(2024-07-03 07:30), datetime!(2024-07-03 11:00)),
            TripStatus::Cancelled,
            350,
            "Trip cancelled due to maintenance",
        ),
        trip(
            4,
            "MNO-2345",
            "William Miller",
            ("Rome, Italy", &["Naples, Italy"], "Vienna, Austria"),
            (datetime!(2024-07-04 10:00), datetime!(2024-07-04 22:00)),
            TripStatus::Active,
            1_120,
            "",
        ),
    ]
}

#[test]
fn status_dropdown_keeps_the_two_active_trips_in_order() {
    let mut screen = ListScreen::new(demo_trips(), trip_columns());
    screen.set_filter("status", FieldValue::text("active"));

    let view = screen.view();
    assert_eq!(view.total, 2);
    assert_eq!(view.rows[0].driver, "Veronica Herman");
    assert_eq!(view.rows[1].driver, "William Miller");
}

#[test]
fn clearing_the_dropdown_restores_every_trip() {
    let mut screen = ListScreen::new(demo_trips(), trip_columns());
    screen.set_filter("status", FieldValue::text("cancelled"));
    assert_eq!(screen.view().total, 1);

    // The dropdown's empty entry maps to an unset constraint.
    screen.set_filter("status", FieldValue::text(""));
    assert_eq!(screen.view().total, 4);
}

#[test]
fn global_search_matches_subsequences_of_driver_names() {
    let mut screen = ListScreen::new(demo_trips(), trip_columns());

    screen.set_search("vrnca");
    let view = screen.view();
    assert_eq!(view.total, 1);
    assert_eq!(view.rows[0].driver, "Veronica Herman");

    // No searchable field contains j, h, n in order.
    screen.set_search("jhn");
    assert_eq!(screen.view().total, 0);
}

#[test]
fn sorting_by_distance_orders_trips_numerically() {
    let mut screen = ListScreen::new(demo_trips(), trip_columns());
    screen.cycle_sort("distance_km");

    let distances: Vec<i64> = screen.view().rows.iter().map(|t| t.distance_km).collect();
    assert_eq!(distances, vec![350, 650, 1_120, 1_420]);
}

#[test]
fn drawer_submission_appends_a_validated_trip() {
    let mut screen = ListScreen::new(demo_trips(), trip_columns());

    let form = TripFormInput {
        vehicle: "QRS-7788".to_owned(),
        driver: "Marta Kovacs".to_owned(),
        start_location: "Prague, Czechia".to_owned(),
        stops: Vec::new(),
        end_location: "Krakow, Poland".to_owned(),
        start_time: Some(datetime!(2024-07-05 06:00)),
        end_time: Some(datetime!(2024-07-05 14:00)),
        status: Some(TripStatus::Active),
        distance_km: Some(540),
        notes: String::new(),
    };
    FormPayload::Trip(form.clone()).validate().expect("valid form");

    let next_id = TripId::new(screen.records().len() as i64 + 1);
    screen.push_record(form.into_record(next_id).expect("record builds"));

    let mut filtered = ListScreen::new(screen.records().to_vec(), trip_columns());
    filtered.set_filter("status", FieldValue::text("active"));
    assert_eq!(filtered.view().total, 3);
}
