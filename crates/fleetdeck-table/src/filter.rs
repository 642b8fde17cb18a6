// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Column, FieldValue, column_by_name};
use std::collections::BTreeMap;

/// Exact-match constraints keyed by column name, as picked from the
/// per-screen filter dropdowns. Absent keys impose no constraint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    constraints: BTreeMap<String, FieldValue>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setting an unset value (Missing or blank text) clears the
    /// constraint instead of matching literally against it.
    pub fn set(&mut self, field: &str, value: FieldValue) {
        if value.is_unset() {
            self.constraints.remove(field);
        } else {
            self.constraints.insert(field.to_owned(), value);
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.constraints.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.constraints.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.constraints.get(field)
    }

    pub fn constraints(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.constraints
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }

    /// Constraints naming columns the schema does not declare are ignored.
    pub fn matches<R>(&self, record: &R, columns: &[Column<R>]) -> bool {
        self.constraints.iter().all(|(field, expected)| {
            match column_by_name(columns, field) {
                Some(column) => column.value(record) == *expected,
                None => true,
            }
        })
    }
}

/// Order-preserving subsequence of records satisfying every constraint.
/// An empty spec returns the identity sequence.
pub fn apply_filter<'a, R>(
    records: &'a [R],
    columns: &[Column<R>],
    spec: &FilterSpec,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| spec.matches(*record, columns))
        .collect()
}
