// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::Instant;

use fleetdeck_table::{
    Column, DebouncedInput, FieldValue, PageView, SortDirection, TableQuery, cycle_sort, run_query,
};

/// One list view's worth of mutable state: the loaded records, the screen's
/// column schema, the live query specs, and the debounced search box. The
/// pipeline itself stays a pure function of (records, query); this owns
/// everything that changes between renders.
#[derive(Debug, Clone)]
pub struct ListScreen<R> {
    records: Vec<R>,
    columns: Vec<Column<R>>,
    query: TableQuery,
    search_input: DebouncedInput,
}

impl<R: Clone> ListScreen<R> {
    pub fn new(records: Vec<R>, columns: Vec<Column<R>>) -> Self {
        Self {
            records,
            columns,
            query: TableQuery::new(),
            search_input: DebouncedInput::default(),
        }
    }

    pub fn with_search_input(mut self, search_input: DebouncedInput) -> Self {
        self.search_input = search_input;
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    /// Fresh load from the data collaborator; specs survive, the window
    /// snaps back to the first page.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.query.page.index = 0;
    }

    /// Drawer submissions append to the in-memory collection.
    pub fn push_record(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn set_filter(&mut self, field: &str, value: FieldValue) {
        self.query.filter.set(field, value);
        self.query.page.index = 0;
    }

    pub fn clear_filters(&mut self) {
        self.query.filter.clear_all();
        self.query.page.index = 0;
    }

    pub fn cycle_sort(&mut self, field: &str) -> Option<SortDirection> {
        cycle_sort(&mut self.query.sort, field)
    }

    pub fn set_page(&mut self, index: usize) {
        self.query.page.index = index;
    }

    /// Changing the page size always rewinds to the first page so the
    /// index can never point past the new last page.
    pub fn set_page_size(&mut self, size: usize) {
        self.query.page.size = size.max(1);
        self.query.page.index = 0;
    }

    /// Raw keystroke from the search box; nothing recomputes until the
    /// quiescence interval passes.
    pub fn search_typed(&mut self, value: &str, now: Instant) {
        self.search_input.push(value, now);
    }

    /// Commits a quiesced search value into the query. Returns true when
    /// the committed value changed the query.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        let Some(committed) = self.search_input.poll(now) else {
            return false;
        };
        if committed == self.query.search {
            return false;
        }
        self.query.search = committed;
        self.query.page.index = 0;
        true
    }

    /// Immediate commit, bypassing the debounce (used by non-interactive
    /// callers such as the CLI).
    pub fn set_search(&mut self, value: &str) {
        self.search_input.cancel();
        self.query.search = value.to_owned();
        self.query.page.index = 0;
    }

    pub fn view(&self) -> PageView<R> {
        run_query(&self.records, &self.columns, &self.query)
    }
}
