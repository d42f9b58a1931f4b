//! Range reference: `<table prefix><from>:<to>`

use std::fmt;
use std::str::FromStr;

use super::cell::write_table_prefix;
use super::local_cell::{LocalCellRef, LocalCellRefBuilder};
use super::parser::RangeAddressParser;
use super::table::{TableRef, TableRefBuilder};
use crate::error::ParseError;

/// Separator between the two cells of a range
pub const RANGE_SEP: char = ':';

/// A range of cells. Only the first cell carries the table prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRef {
    table_ref: Option<TableRef>,
    from: LocalCellRef,
    to: LocalCellRef,
}

impl RangeRef {
    pub fn new(table_ref: Option<TableRef>, from: LocalCellRef, to: LocalCellRef) -> Self {
        Self {
            table_ref,
            from,
            to,
        }
    }

    pub fn builder() -> RangeRefBuilder {
        RangeRefBuilder::default()
    }

    pub fn table_ref(&self) -> Option<&TableRef> {
        self.table_ref.as_ref()
    }

    pub fn from_cell(&self) -> &LocalCellRef {
        &self.from
    }

    pub fn to_cell(&self) -> &LocalCellRef {
        &self.to
    }

    pub fn from_row(&self) -> u32 {
        self.from.row()
    }

    pub fn from_column(&self) -> u32 {
        self.from.column()
    }

    pub fn to_row(&self) -> u32 {
        self.to.row()
    }

    pub fn to_column(&self) -> u32 {
        self.to.column()
    }

    /// Write the range to a sink
    pub fn write<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write_table_prefix(self.table_ref.as_ref(), out)?;
        self.from.write(out)?;
        out.write_char(RANGE_SEP)?;
        self.to.write(out)
    }
}

impl fmt::Display for RangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl FromStr for RangeRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeAddressParser::default().parse(s)
    }
}

/// Builder for [`RangeRef`]
#[derive(Debug, Clone, Default)]
pub struct RangeRefBuilder {
    table: TableRefBuilder,
    from: LocalCellRefBuilder,
    to: LocalCellRefBuilder,
}

impl RangeRefBuilder {
    pub fn from_row(mut self, row: u32) -> Self {
        self.from = self.from.row(row);
        self
    }

    pub fn from_abs_row(mut self, row: u32) -> Self {
        self.from = self.from.abs_row(row);
        self
    }

    pub fn from_column(mut self, column: u32) -> Self {
        self.from = self.from.column(column);
        self
    }

    pub fn from_abs_column(mut self, column: u32) -> Self {
        self.from = self.from.abs_column(column);
        self
    }

    pub fn to_row(mut self, row: u32) -> Self {
        self.to = self.to.row(row);
        self
    }

    pub fn to_abs_row(mut self, row: u32) -> Self {
        self.to = self.to.abs_row(row);
        self
    }

    pub fn to_column(mut self, column: u32) -> Self {
        self.to = self.to.column(column);
        self
    }

    pub fn to_abs_column(mut self, column: u32) -> Self {
        self.to = self.to.abs_column(column);
        self
    }

    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table = self.table.table(table_name);
        self
    }

    pub fn abs_table(mut self, table_name: impl Into<String>) -> Self {
        self.table = self.table.abs_table(table_name);
        self
    }

    pub fn file(mut self, file_name: impl Into<String>) -> Self {
        self.table = self.table.file(file_name);
        self
    }

    pub fn build(self) -> RangeRef {
        RangeRef::new(self.table.build_opt(), self.from.build(), self.to.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let range = RangeRef::builder()
            .table("Sheet 1")
            .from_abs_row(2)
            .from_abs_column(1)
            .to_row(4)
            .to_column(3)
            .build();
        assert_eq!(range.to_string(), "'Sheet 1'.$B$3:D5");
        assert_eq!(range.from_row(), 2);
        assert_eq!(range.from_column(), 1);
        assert_eq!(range.to_row(), 4);
        assert_eq!(range.to_column(), 3);
    }

    #[test]
    fn test_without_table() {
        let range = RangeRef::builder().to_row(9).to_abs_column(2).build();
        assert_eq!(range.to_string(), "A1:$C10");
        assert!(range.table_ref().is_none());
    }

    #[test]
    fn test_file_prefix_only_on_first_cell() {
        let range = RangeRef::builder()
            .file("data.ods")
            .table("t")
            .to_row(1)
            .to_column(1)
            .build();
        assert_eq!(range.to_string(), "'data.ods'#t.A1:B2");
    }
}
