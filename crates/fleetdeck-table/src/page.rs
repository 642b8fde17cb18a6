// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub index: usize,
    pub size: usize,
}

impl PageSpec {
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The windowed slice handed to the display layer, plus the pre-window
/// total for pager rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<R> {
    pub rows: Vec<R>,
    pub total: usize,
}

impl<R> PageView<R> {
    pub fn page_count(&self, page_size: usize) -> usize {
        self.total.div_ceil(page_size.max(1))
    }
}

/// Slices the ordered rows into the requested window. An index past the
/// last page yields an empty window; it is never an error.
pub fn paginate<R: Clone>(rows: &[&R], spec: &PageSpec) -> PageView<R> {
    let total = rows.len();
    let size = spec.size.max(1);
    let start = spec.index.saturating_mul(size);
    let end = start.saturating_add(size).min(total);

    let windowed = if start >= total {
        Vec::new()
    } else {
        rows[start..end].iter().map(|row| (*row).clone()).collect()
    };

    PageView {
        rows: windowed,
        total,
    }
}
