// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use fleetdeck_app::{
    ListScreen, Order, TabKind, Trip, UserAccount, Vehicle, fleet_columns, order_columns,
    trip_columns, user_columns, vehicle_columns,
};
use fleetdeck_client::Client;
use fleetdeck_table::{Column, FieldValue, PageView, SortDirection, TableQuery};
use fleetdeck_testkit::{FleetFaker, sample_trips};

const DEMO_COLLECTION_SIZE: usize = 25;

/// Where a screen's records come from. Demo serves the built-in trip
/// fixtures plus deterministic generated collections; Remote fetches
/// everything over HTTP.
pub enum RecordSource {
    Demo { seed: u64 },
    Remote(Client),
}

impl RecordSource {
    fn trips(&self) -> Result<Vec<Trip>> {
        match self {
            Self::Demo { .. } => Ok(sample_trips()),
            Self::Remote(client) => client.fetch_trips(),
        }
    }

    fn vehicles(&self) -> Result<Vec<Vehicle>> {
        match self {
            Self::Demo { seed } => Ok(FleetFaker::new(*seed).vehicles(DEMO_COLLECTION_SIZE)),
            Self::Remote(client) => client.fetch_vehicles(),
        }
    }

    fn users(&self) -> Result<Vec<UserAccount>> {
        match self {
            Self::Demo { seed } => Ok(FleetFaker::new(*seed).user_accounts(DEMO_COLLECTION_SIZE)),
            Self::Remote(client) => client.fetch_users(),
        }
    }

    fn orders(&self) -> Result<Vec<Order>> {
        match self {
            Self::Demo { seed } => Ok(FleetFaker::new(*seed).orders(DEMO_COLLECTION_SIZE)),
            Self::Remote(client) => client.fetch_orders(),
        }
    }
}

/// One shot's worth of query flags, assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRequest {
    pub tab: TabKind,
    pub filters: Vec<(String, String)>,
    pub search: Option<String>,
    pub sort: Option<SortRequest>,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for ScreenRequest {
    fn default() -> Self {
        Self {
            tab: TabKind::Fleet,
            filters: Vec::new(),
            search: None,
            sort: None,
            page: 0,
            page_size: fleetdeck_table::DEFAULT_PAGE_SIZE,
        }
    }
}

pub fn run_screen(source: &RecordSource, request: &ScreenRequest) -> Result<String> {
    match request.tab {
        TabKind::Fleet => render_screen(source.vehicles()?, fleet_columns(), request),
        TabKind::Trips => render_screen(source.trips()?, trip_columns(), request),
        TabKind::Vehicles => render_screen(source.vehicles()?, vehicle_columns(), request),
        TabKind::Users => render_screen(source.users()?, user_columns(), request),
        TabKind::Orders => render_screen(source.orders()?, order_columns(), request),
    }
}

fn render_screen<R: Clone>(
    records: Vec<R>,
    columns: Vec<Column<R>>,
    request: &ScreenRequest,
) -> Result<String> {
    for (field, _) in &request.filters {
        require_column(&columns, request.tab, field)?;
    }
    if let Some(sort) = &request.sort {
        require_column(&columns, request.tab, &sort.field)?;
    }

    let mut screen = ListScreen::new(records, columns);
    screen.set_page_size(request.page_size);
    for (field, value) in &request.filters {
        screen.set_filter(field, filter_value(value));
    }
    if let Some(search) = &request.search {
        screen.set_search(search);
    }
    if let Some(sort) = &request.sort {
        screen.cycle_sort(&sort.field);
        if sort.direction == SortDirection::Desc {
            screen.cycle_sort(&sort.field);
        }
    }
    screen.set_page(request.page);

    let view = screen.view();
    Ok(render_table(screen.columns(), &view, screen.query()))
}

fn require_column<R>(columns: &[Column<R>], tab: TabKind, field: &str) -> Result<()> {
    if columns.iter().any(|column| column.name == field) {
        return Ok(());
    }
    let known: Vec<&str> = columns.iter().map(|column| column.name).collect();
    bail!(
        "unknown column {field:?} for the {} screen; known columns: {}",
        tab.label(),
        known.join(", ")
    )
}

/// Filter flags arrive as strings; numeric-looking values compare against
/// numeric columns, everything else compares as text.
fn filter_value(raw: &str) -> FieldValue {
    match raw.parse::<i64>() {
        Ok(number) => FieldValue::Integer(number),
        Err(_) => FieldValue::text(raw),
    }
}

fn render_table<R>(columns: &[Column<R>], view: &PageView<R>, query: &TableQuery) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|column| column.label.len()).collect();
    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    let cell = column.value(row).display();
                    widths[index] = widths[index].max(cell.len());
                    cell
                })
                .collect()
        })
        .collect();

    let mut out = String::new();
    render_row(
        &mut out,
        &widths,
        columns.iter().map(|column| column.label.to_owned()),
    );
    render_row(
        &mut out,
        &widths,
        widths.iter().map(|width| "-".repeat(*width)),
    );
    for row in rows {
        render_row(&mut out, &widths, row.into_iter());
    }

    let size = query.page.size.max(1);
    let pages = view.page_count(size).max(1);
    out.push_str(&format!(
        "{} records | page {}/{} | showing {}\n",
        view.total,
        query.page.index + 1,
        pages,
        view.rows.len()
    ));
    out
}

fn render_row(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let mut line = String::new();
    for (index, cell) in cells.enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}", width = widths[index]));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
