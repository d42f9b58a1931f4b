//! Cell reference: optional table prefix plus local address

use std::fmt;
use std::str::FromStr;

use super::local_cell::{LocalCellRef, LocalCellRefBuilder};
use super::parser::CellAddressParser;
use super::table::{TableRef, TableRefBuilder};
use crate::error::ParseError;

/// Separator between the table and the local address
pub const TABLE_CELL_SEP: char = '.';

/// A cell reference such as `'Sheet 1'.$B$3`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    table_ref: Option<TableRef>,
    local_cell_ref: LocalCellRef,
}

impl CellRef {
    pub fn new(table_ref: Option<TableRef>, local_cell_ref: LocalCellRef) -> Self {
        Self {
            table_ref,
            local_cell_ref,
        }
    }

    /// A cell reference without table
    pub fn create(row: u32, column: u32, status: u8) -> Self {
        Self::new(None, LocalCellRef::new(row, column, status))
    }

    pub fn builder() -> CellRefBuilder {
        CellRefBuilder::default()
    }

    pub fn table_ref(&self) -> Option<&TableRef> {
        self.table_ref.as_ref()
    }

    pub fn local_cell_ref(&self) -> &LocalCellRef {
        &self.local_cell_ref
    }

    pub fn row(&self) -> u32 {
        self.local_cell_ref.row()
    }

    pub fn column(&self) -> u32 {
        self.local_cell_ref.column()
    }

    /// Status of the local part (see [`LocalCellRef::status`])
    pub fn status(&self) -> u8 {
        self.local_cell_ref.status()
    }

    /// Write the reference to a sink.
    ///
    /// The table prefix and the dot are only written when the table
    /// reference carries a table name.
    pub fn write<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write_table_prefix(self.table_ref.as_ref(), out)?;
        self.local_cell_ref.write(out)
    }
}

pub(crate) fn write_table_prefix<W: fmt::Write + ?Sized>(
    table_ref: Option<&TableRef>,
    out: &mut W,
) -> fmt::Result {
    match table_ref {
        Some(table_ref) if table_ref.table_name().is_some() => {
            table_ref.write(out)?;
            out.write_char(TABLE_CELL_SEP)
        }
        _ => Ok(()),
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl FromStr for CellRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellAddressParser::default().parse(s)
    }
}

impl From<LocalCellRef> for CellRef {
    fn from(local_cell_ref: LocalCellRef) -> Self {
        Self::new(None, local_cell_ref)
    }
}

/// Builder for [`CellRef`]
#[derive(Debug, Clone, Default)]
pub struct CellRefBuilder {
    table: TableRefBuilder,
    local: LocalCellRefBuilder,
}

impl CellRefBuilder {
    pub fn row(mut self, row: u32) -> Self {
        self.local = self.local.row(row);
        self
    }

    pub fn abs_row(mut self, row: u32) -> Self {
        self.local = self.local.abs_row(row);
        self
    }

    pub fn column(mut self, column: u32) -> Self {
        self.local = self.local.column(column);
        self
    }

    pub fn abs_column(mut self, column: u32) -> Self {
        self.local = self.local.abs_column(column);
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

    /// Build the reference; no table and no file gives a table-less reference
    pub fn build(self) -> CellRef {
        CellRef::new(self.table.build_opt(), self.local.build())
    }
}
