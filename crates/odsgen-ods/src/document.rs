//! The document: tables, styles and settings

use odsgen_core::{Error, PositionUtil, UniqueList};

use crate::error::{OdsError, OdsResult};
use crate::settings::Settings;
use crate::style::StylesContainer;
use crate::table::Table;
use crate::value::CellValue;

/// An in-memory spreadsheet document
#[derive(Debug, Clone, Default)]
pub struct Document {
    tables: UniqueList<Table>,
    styles: StylesContainer,
    settings: Settings,
    position_util: PositionUtil,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new table. The first table becomes the active one.
    pub fn add_table(&mut self, name: impl Into<String>) -> OdsResult<&mut Table> {
        let table = Table::new(name)?;
        let name = table.name().to_string();
        self.tables.push(table)?;
        self.settings.add_table_config(&name)?;
        if self.tables.len() == 1 {
            self.settings.set_active_table(&name);
        }
        let index = self.tables.len() - 1;
        let len = self.tables.len();
        self.tables
            .get_mut(index)
            .ok_or_else(|| OdsError::from(Error::IndexOutOfRange { index, len }))
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get_by_name(name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_by_name_mut(name)
    }

    /// Remove a table and its settings entry. If it was active, the first
    /// remaining table becomes active.
    pub fn remove_table(&mut self, name: &str) -> Option<Table> {
        let table = self.tables.remove_by_name(name)?;
        self.settings.remove_table_config(name);
        if self.active_table() == Some(name) {
            let next = self.tables.names().next().unwrap_or_default().to_string();
            self.settings.set_active_table(&next);
        }
        Some(table)
    }

    pub fn tables(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn set_active_table(&mut self, name: &str) -> OdsResult<()> {
        if !self.tables.contains_name(name) {
            return Err(OdsError::UnknownTable(name.to_string()));
        }
        self.settings.set_active_table(name);
        Ok(())
    }

    /// Name of the active table, `None` if the document has no table
    pub fn active_table(&self) -> Option<&str> {
        self.settings
            .view_setting("ActiveTable")
            .filter(|name| !name.is_empty())
    }

    /// Set a cell through an address like `Sheet1.B3` or `'My sheet'.$A$1`
    pub fn set_cell_at(&mut self, address: &str, value: impl Into<CellValue>) -> OdsResult<()> {
        let cell_ref = self.position_util.new_cell_ref(address)?;
        let Some(table_name) = cell_ref.table_ref().and_then(|t| t.table_name()) else {
            return Err(OdsError::MissingTable(address.to_string()));
        };
        let table = self
            .tables
            .get_by_name_mut(table_name)
            .ok_or_else(|| OdsError::UnknownTable(table_name.to_string()))?;
        table.set_cell(cell_ref.row(), cell_ref.column(), value)
    }

    /// Value at an address, `Empty` outside the grid
    pub fn value_at(&self, address: &str) -> OdsResult<&CellValue> {
        let cell_ref = self.position_util.new_cell_ref(address)?;
        let Some(table_name) = cell_ref.table_ref().and_then(|t| t.table_name()) else {
            return Err(OdsError::MissingTable(address.to_string()));
        };
        let table = self
            .table(table_name)
            .ok_or_else(|| OdsError::UnknownTable(table_name.to_string()))?;
        Ok(table.value(cell_ref.row(), cell_ref.column()))
    }

    pub fn styles(&self) -> &StylesContainer {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StylesContainer {
        &mut self.styles
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn position_util(&self) -> &PositionUtil {
        &self.position_util
    }
}
