//! Shortcuts to build, parse and render references

use super::cell::{CellRef, CellRefBuilder};
use super::local_cell::LocalCellRef;
use super::parser::{CellAddressParser, RangeAddressParser};
use super::range::{RangeRef, RangeRefBuilder};
use super::table::{TableRef, TableRefBuilder};
use super::table_name::TableNameUtil;
use super::RELATIVE;
use crate::error::{ParseError, Result};

/// Entry point for positions: parse addresses and render `(row, column)` pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionUtil {
    table_name_util: TableNameUtil,
}

impl PositionUtil {
    pub fn new(table_name_util: TableNameUtil) -> Self {
        Self { table_name_util }
    }

    /// Parse a cell address like `'Sheet 1'.B3`
    pub fn new_cell_ref(&self, address: &str) -> std::result::Result<CellRef, ParseError> {
        CellAddressParser::create(self.table_name_util).parse(address)
    }

    /// Parse a range address like `Sheet1.A1:C3`
    pub fn new_range_ref(&self, address: &str) -> std::result::Result<RangeRef, ParseError> {
        RangeAddressParser::create(self.table_name_util).parse(address)
    }

    /// Relative reference to a cell of the current table
    pub fn cell_ref(&self, row: u32, column: u32) -> CellRef {
        CellRef::create(row, column, RELATIVE)
    }

    /// Relative reference to a cell of a given table
    pub fn table_cell_ref(&self, table_name: &str, row: u32, column: u32) -> CellRef {
        CellRef::builder()
            .table(table_name)
            .row(row)
            .column(column)
            .build()
    }

    /// `(1, 2)` gives `C2`
    pub fn to_cell_address(&self, row: u32, column: u32) -> String {
        self.cell_ref(row, column).to_string()
    }

    /// Address of a cell prefixed by its escaped table name
    pub fn to_table_cell_address(&self, table_name: &str, row: u32, column: u32) -> String {
        self.table_cell_ref(table_name, row, column).to_string()
    }

    pub fn to_range_address(&self, row1: u32, column1: u32, row2: u32, column2: u32) -> String {
        RangeRef::new(
            None,
            LocalCellRef::new(row1, column1, RELATIVE),
            LocalCellRef::new(row2, column2, RELATIVE),
        )
        .to_string()
    }

    /// Only the first cell carries the table name: `Sheet1.A1:B2`
    pub fn to_table_range_address(
        &self,
        table_name: &str,
        row1: u32,
        column1: u32,
        row2: u32,
        column2: u32,
    ) -> String {
        self.range_builder()
            .table(table_name)
            .from_row(row1)
            .from_column(column1)
            .to_row(row2)
            .to_column(column2)
            .build()
            .to_string()
    }

    /// See [`TableNameUtil::check_table_name`]
    pub fn check_table_name(&self, name: &str) -> Result<()> {
        self.table_name_util.check_table_name(name)
    }

    pub fn cell_builder(&self) -> CellRefBuilder {
        CellRef::builder()
    }

    pub fn range_builder(&self) -> RangeRefBuilder {
        RangeRef::builder()
    }

    pub fn table_builder(&self) -> TableRefBuilder {
        TableRef::builder()
    }
}
