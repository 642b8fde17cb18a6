// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{
    Column, FilterSpec, PageSpec, PageView, SortSpec, apply_filter, apply_fuzzy, apply_sort,
    paginate,
};

/// Everything a screen's user controls feed into one view computation:
/// dropdown filters, the committed search text, the active sort, and the
/// pager window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableQuery {
    pub filter: FilterSpec,
    pub search: String,
    pub sort: Option<SortSpec>,
    pub page: PageSpec,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The whole pipeline: filter -> fuzzy search -> sort -> page. Pure in
/// its inputs; the owning screen re-runs it whenever any spec changes.
pub fn run_query<R: Clone>(
    records: &[R],
    columns: &[Column<R>],
    query: &TableQuery,
) -> PageView<R> {
    let filtered = apply_filter(records, columns, &query.filter);
    let mut searched = apply_fuzzy(filtered, columns, &query.search);
    apply_sort(&mut searched, columns, query.sort.as_ref());
    paginate(&searched, &query.page)
}
