//! The two-column table handed to the reporting sink.
//!
//! The analytics host renders tables from plain data: column headers plus an
//! ordered list of rows. This module provides that structure for the claim
//! listing, built through a builder so the column headers are fixed before
//! any rows are added.

use serde::Serialize;

/// An ordered two-column table of claim locations and areas.
///
/// Row order is significant and is preserved exactly as built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    column_one: String,
    column_two: String,
    rows: Vec<Row>,
}

/// A single table row: a formatted claim location and its area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Formatted location of the claim's greater boundary corner.
    pub location: String,
    /// The claim's area, in blocks.
    pub area: u64,
}

impl Table {
    /// Starts building a table.
    ///
    /// The builder defaults to the "Claim" / "Area" headers used by the
    /// claim listing.
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// The header of the first (location) column.
    #[must_use]
    pub fn column_one(&self) -> &str {
        &self.column_one
    }

    /// The header of the second (area) column.
    #[must_use]
    pub fn column_two(&self) -> &str {
        &self.column_two
    }

    /// The table rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builder for [`Table`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    column_one: String,
    column_two: String,
    rows: Vec<Row>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            column_one: "Claim".to_string(),
            column_two: "Area".to_string(),
            rows: Vec::new(),
        }
    }
}

impl TableBuilder {
    /// Sets the header of the first column.
    #[must_use]
    pub fn column_one(mut self, header: impl Into<String>) -> Self {
        self.column_one = header.into();
        self
    }

    /// Sets the header of the second column.
    #[must_use]
    pub fn column_two(mut self, header: impl Into<String>) -> Self {
        self.column_two = header.into();
        self
    }

    /// Appends a row.
    #[must_use]
    pub fn row(mut self, location: impl Into<String>, area: u64) -> Self {
        self.rows.push(Row {
            location: location.into(),
            area,
        });
        self
    }

    /// Finishes the table.
    #[must_use]
    pub fn build(self) -> Table {
        Table {
            column_one: self.column_one,
            column_two: self.column_two,
            rows: self.rows,
        }
    }
}
