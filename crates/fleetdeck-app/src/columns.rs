// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdeck_table::{Column, FieldValue};

use crate::{Order, Trip, UserAccount, Vehicle};

/// Per-screen column schemas. Searchable flags mark the fields the global
/// search box ranks against; dropdown filters target columns by name.
pub fn trip_columns() -> Vec<Column<Trip>> {
    vec![
        Column::new("vehicle", "Vehicle", |trip: &Trip| {
            FieldValue::text(trip.vehicle.clone())
        })
        .searchable(),
        Column::new("driver", "Driver", |trip: &Trip| {
            FieldValue::text(trip.driver.clone())
        })
        .searchable(),
        Column::new("start_location", "Start", |trip: &Trip| {
            FieldValue::text(trip.start_location.clone())
        })
        .searchable(),
        Column::new("stops", "Stops", |trip: &Trip| {
            FieldValue::List(trip.stops.clone())
        }),
        Column::new("end_location", "End", |trip: &Trip| {
            FieldValue::text(trip.end_location.clone())
        })
        .searchable(),
        Column::new("start_time", "Start Time", |trip: &Trip| {
            FieldValue::DateTime(trip.start_time)
        }),
        Column::new("end_time", "End Time", |trip: &Trip| {
            FieldValue::DateTime(trip.end_time)
        }),
        Column::new("status", "Status", |trip: &Trip| {
            FieldValue::text(trip.status.as_str())
        }),
        Column::new("distance_km", "Distance (km)", |trip: &Trip| {
            FieldValue::Integer(trip.distance_km)
        }),
        Column::new("notes", "Notes", |trip: &Trip| {
            FieldValue::text(trip.notes.clone())
        }),
    ]
}

pub fn vehicle_columns() -> Vec<Column<Vehicle>> {
    vec![
        Column::new("id", "ID", |vehicle: &Vehicle| {
            FieldValue::Integer(vehicle.id.get())
        }),
        Column::new("license_plate", "License Plate", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.license_plate.clone())
        })
        .searchable(),
        Column::new("make", "Make", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.make.clone())
        })
        .searchable(),
        Column::new("model", "Model", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.model.clone())
        })
        .searchable(),
        Column::new("year", "Year", |vehicle: &Vehicle| {
            FieldValue::Integer(i64::from(vehicle.year))
        }),
        Column::new("type", "Type", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.vehicle_type.as_str())
        }),
        Column::new("status", "Status", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.status.as_str())
        }),
        Column::new("location", "Location", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.location.clone())
        })
        .searchable(),
        Column::new("driver", "Driver", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.driver.clone())
        })
        .searchable(),
        Column::new("last_service_date", "Last Service", |vehicle: &Vehicle| {
            FieldValue::optional_date(vehicle.last_service_date)
        }),
        Column::new("warnings", "Warnings", |vehicle: &Vehicle| {
            FieldValue::Integer(vehicle.warnings)
        }),
        Column::new("progress", "Progress", |vehicle: &Vehicle| {
            FieldValue::Integer(vehicle.progress)
        }),
    ]
}

/// The fleet overview shows the same vehicle records with a trimmed
/// column set.
pub fn fleet_columns() -> Vec<Column<Vehicle>> {
    vec![
        Column::new("license_plate", "License Plate", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.license_plate.clone())
        })
        .searchable(),
        Column::new("make", "Make", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.make.clone())
        })
        .searchable(),
        Column::new("model", "Model", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.model.clone())
        })
        .searchable(),
        Column::new("year", "Year", |vehicle: &Vehicle| {
            FieldValue::Integer(i64::from(vehicle.year))
        }),
        Column::new("type", "Type", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.vehicle_type.as_str())
        }),
        Column::new("status", "Status", |vehicle: &Vehicle| {
            FieldValue::text(vehicle.status.as_str())
        }),
    ]
}

pub fn user_columns() -> Vec<Column<UserAccount>> {
    vec![
        Column::new("full_name", "User", |user: &UserAccount| {
            FieldValue::text(user.full_name.clone())
        })
        .searchable(),
        Column::new("username", "Username", |user: &UserAccount| {
            FieldValue::text(user.username.clone())
        })
        .searchable(),
        Column::new("email", "Email", |user: &UserAccount| {
            FieldValue::text(user.email.clone())
        })
        .searchable(),
        Column::new("role", "Role", |user: &UserAccount| {
            FieldValue::text(user.role.as_str())
        }),
        Column::new("plan", "Plan", |user: &UserAccount| {
            FieldValue::text(user.plan.as_str())
        }),
        Column::new("status", "Status", |user: &UserAccount| {
            FieldValue::text(user.status.as_str())
        }),
    ]
}

pub fn order_columns() -> Vec<Column<Order>> {
    vec![
        Column::new("order_number", "Order", |order: &Order| {
            FieldValue::Integer(order.order_number)
        }),
        Column::new("po", "PO", |order: &Order| {
            FieldValue::text(order.po.clone())
        })
        .searchable(),
        Column::new("customer", "Customer", |order: &Order| {
            FieldValue::text(order.customer.clone())
        })
        .searchable(),
        Column::new("shipment_status", "Status", |order: &Order| {
            FieldValue::text(order.shipment_status.as_str())
        }),
        Column::new("order_type", "Order Type", |order: &Order| {
            FieldValue::text(order.order_type.as_str())
        }),
        Column::new("placed_at", "Date / Time", |order: &Order| {
            FieldValue::DateTime(order.placed_at)
        }),
    ]
}
