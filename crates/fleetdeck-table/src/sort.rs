// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Column, column_by_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Single-column sort. "No sort" is the absence of a spec, which keeps
/// the incoming order untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Advances the active sort for `field`: none -> asc -> desc -> none.
/// Picking a different field replaces the previous spec outright. Returns
/// the direction now in effect, if any.
pub fn cycle_sort(active: &mut Option<SortSpec>, field: &str) -> Option<SortDirection> {
    match active {
        Some(spec) if spec.field == field => match spec.direction {
            SortDirection::Asc => {
                spec.direction = SortDirection::Desc;
                Some(SortDirection::Desc)
            }
            SortDirection::Desc => {
                *active = None;
                None
            }
        },
        _ => {
            *active = Some(SortSpec::new(field, SortDirection::Asc));
            Some(SortDirection::Asc)
        }
    }
}

/// Stable sort on the spec's column. Equal keys keep their incoming
/// relative order, so re-running on identical data never reorders rows.
/// Specs naming an undeclared column leave the order untouched.
pub fn apply_sort<R>(rows: &mut [&R], columns: &[Column<R>], sort: Option<&SortSpec>) {
    let Some(spec) = sort else {
        return;
    };
    let Some(column) = column_by_name(columns, &spec.field) else {
        return;
    };

    rows.sort_by(|left, right| {
        let ordering = column.value(left).cmp_value(&column.value(right));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
