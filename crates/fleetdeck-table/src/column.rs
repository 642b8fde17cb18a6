// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::FieldValue;
use std::fmt;

/// A named accessor into one record type. Screens own their column lists;
/// the pipeline resolves filter and sort fields against `name`.
pub struct Column<R> {
    pub name: &'static str,
    pub label: &'static str,
    pub searchable: bool,
    pub accessor: fn(&R) -> FieldValue,
}

impl<R> Column<R> {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        accessor: fn(&R) -> FieldValue,
    ) -> Self {
        Self {
            name,
            label,
            searchable: false,
            accessor,
        }
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn value(&self, record: &R) -> FieldValue {
        (self.accessor)(record)
    }
}

pub fn column_by_name<'a, R>(columns: &'a [Column<R>], name: &str) -> Option<&'a Column<R>> {
    columns.iter().find(|column| column.name == name)
}

// Manual impls keep Column copyable without bounding R.
impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("searchable", &self.searchable)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, column_by_name};
    use crate::FieldValue;

    struct Row {
        plate: &'static str,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("plate", "License Plate", |row: &Row| {
                FieldValue::text(row.plate)
            })
            .searchable(),
        ]
    }

    #[test]
    fn lookup_by_name_finds_declared_columns_only() {
        let columns = columns();
        assert!(column_by_name(&columns, "plate").is_some());
        assert!(column_by_name(&columns, "driver").is_none());
    }

    #[test]
    fn accessor_extracts_the_field_value() {
        let columns = columns();
        let row = Row { plate: "ABC-1234" };
        assert_eq!(columns[0].value(&row), FieldValue::text("ABC-1234"));
        assert!(columns[0].searchable);
    }
}
