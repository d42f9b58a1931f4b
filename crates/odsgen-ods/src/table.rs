//! Tables: a name and a sparse grid of cells

use std::collections::BTreeMap;

use odsgen_core::{NamedObject, TableNameUtil};

use crate::error::{OdsError, OdsResult};
use crate::value::CellValue;
use crate::{MAX_COLS, MAX_ROWS};

/// A cell: value plus optional style name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub value: CellValue,
    pub style_name: Option<String>,
}

/// A table (sheet) of the document.
///
/// Only the cells that were set are stored, row by row:
/// `BTreeMap<row, BTreeMap<column, Cell>>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    rows: BTreeMap<u32, BTreeMap<u32, Cell>>,
    style_name: Option<String>,
}

impl Table {
    /// Create an empty table. The name must pass
    /// [`TableNameUtil::check_table_name`].
    pub fn new(name: impl Into<String>) -> OdsResult<Self> {
        let name = name.into();
        TableNameUtil::new().check_table_name(&name)?;
        Ok(Self {
            name,
            rows: BTreeMap::new(),
            style_name: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a cell value
    pub fn set_cell(&mut self, row: u32, col: u32, value: impl Into<CellValue>) -> OdsResult<()> {
        self.cell_mut(row, col)?.value = value.into();
        Ok(())
    }

    pub fn set_cell_style(
        &mut self,
        row: u32,
        col: u32,
        style_name: impl Into<String>,
    ) -> OdsResult<()> {
        self.cell_mut(row, col)?.style_name = Some(style_name.into());
        Ok(())
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.rows.get(&row)?.get(&col)
    }

    /// Value of a cell; `Empty` if it was never set
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.cell(row, col).map_or(EMPTY, |cell| &cell.value)
    }

    /// One past the last row holding a cell
    pub fn row_count(&self) -> u32 {
        self.rows.keys().next_back().map_or(0, |row| row + 1)
    }

    /// One past the rightmost column holding a cell
    pub fn column_count(&self) -> u32 {
        self.rows
            .values()
            .filter_map(|cells| cells.keys().next_back())
            .max()
            .map_or(0, |col| col + 1)
    }

    /// Stored rows in order, with their cells by column
    pub fn rows(&self) -> impl Iterator<Item = (u32, &BTreeMap<u32, Cell>)> + '_ {
        self.rows.iter().map(|(row, cells)| (*row, cells))
    }

    /// Stored cells as `(row, column, cell)`, row-major
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> + '_ {
        self.rows
            .iter()
            .flat_map(|(row, cells)| cells.iter().map(move |(col, cell)| (*row, *col, cell)))
    }

    /// Number of cells holding a value
    pub fn cell_count(&self) -> usize {
        self.cells().filter(|(_, _, cell)| !cell.value.is_empty()).count()
    }

    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    pub fn set_style(&mut self, style_name: impl Into<String>) {
        self.style_name = Some(style_name.into());
    }

    fn cell_mut(&mut self, row: u32, col: u32) -> OdsResult<&mut Cell> {
        if row >= MAX_ROWS {
            return Err(OdsError::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(OdsError::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(self.rows.entry(row).or_default().entry(col).or_default())
    }
}

impl NamedObject for Table {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_names() {
        assert!(matches!(Table::new("a/b"), Err(OdsError::Core(_))));
        assert!(Table::new("'quoted").is_err());
        assert!(Table::new("Sheet 1").is_ok());
    }

    #[test]
    fn test_extent() {
        let mut table = Table::new("t").unwrap();
        table.set_cell(2, 3, 1.0).unwrap();
        table.set_cell(0, 0, "a").unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.value(2, 3), &CellValue::Float(1.0));
        assert_eq!(table.value(1, 1), &CellValue::Empty);
        assert_eq!(table.value(10, 10), &CellValue::Empty);
        assert_eq!(table.cell_count(), 2);
    }

    #[test]
    fn test_sparse_storage() {
        let mut table = Table::new("t").unwrap();
        table.set_cell(MAX_ROWS - 1, MAX_COLS - 1, "corner").unwrap();
        assert_eq!(table.row_count(), MAX_ROWS);
        assert_eq!(table.column_count(), MAX_COLS);
        let cells: Vec<_> = table.cells().map(|(row, col, _)| (row, col)).collect();
        assert_eq!(cells, vec![(MAX_ROWS - 1, MAX_COLS - 1)]);
    }

    #[test]
    fn test_bounds() {
        let mut table = Table::new("t").unwrap();
        assert!(matches!(
            table.set_cell(MAX_ROWS, 0, 1.0),
            Err(OdsError::RowOutOfBounds(row, max)) if row == MAX_ROWS && max == MAX_ROWS - 1
        ));
        assert!(matches!(
            table.set_cell_style(0, MAX_COLS, "ce1"),
            Err(OdsError::ColumnOutOfBounds(col, _)) if col == MAX_COLS
        ));
        assert!(matches!(
            table.set_cell(u32::MAX, u32::MAX, 1.0),
            Err(OdsError::RowOutOfBounds(..))
        ));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_styles() {
        let mut table = Table::new("t").unwrap();
        table.set_style("ta1");
        table.set_cell_style(0, 1, "ce1").unwrap();
        assert_eq!(table.style_name(), Some("ta1"));
        assert_eq!(table.cell(0, 1).and_then(|c| c.style_name.as_deref()), Some("ce1"));
        assert!(table.cell(0, 1).is_some_and(|c| c.value.is_empty()));
        assert_eq!(table.cell_count(), 0);
    }
}
