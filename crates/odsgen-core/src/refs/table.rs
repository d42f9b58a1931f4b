//! Table part of a reference: `['file'#][$]table`

use std::fmt;
use std::str::FromStr;

use super::parser::TableAddressParser;
use super::table_name::{write_quoted, TableNameUtil};
use super::ABSOLUTE_TABLE;
use crate::error::ParseError;

/// The table (and optionally the file) a cell or range lives in.
///
/// A file name is always rendered quoted and followed by `#`. A reference
/// with a file but no table renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRef {
    file_name: Option<String>,
    table_name: Option<String>,
    status: u8,
}

impl TableRef {
    /// Create a new table reference; only the [`ABSOLUTE_TABLE`] bit of `status` is kept
    pub fn new(file_name: Option<String>, table_name: Option<String>, status: u8) -> Self {
        Self {
            file_name,
            table_name,
            status: status & ABSOLUTE_TABLE,
        }
    }

    pub fn builder() -> TableRefBuilder {
        TableRefBuilder::default()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    /// Is the table marked with `$`?
    pub fn is_absolute(&self) -> bool {
        self.status & ABSOLUTE_TABLE != 0
    }

    /// Write the reference to a sink
    pub fn write<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        let Some(table_name) = &self.table_name else {
            return Ok(());
        };
        if let Some(file_name) = &self.file_name {
            write_quoted(file_name, out)?;
            out.write_char('#')?;
        }
        if self.is_absolute() {
            out.write_char('$')?;
        }
        TableNameUtil::new().write_escaped(table_name, out)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl FromStr for TableRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableAddressParser::new(TableNameUtil::new()).parse(s)
    }
}

/// Builder for [`TableRef`]
#[derive(Debug, Clone, Default)]
pub struct TableRefBuilder {
    file_name: Option<String>,
    table_name: Option<String>,
    status: u8,
}

impl TableRefBuilder {
    /// Set a relative table
    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self.status &= !ABSOLUTE_TABLE;
        self
    }

    /// Set an absolute table (`$table`)
    pub fn abs_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self.status |= ABSOLUTE_TABLE;
        self
    }

    /// Set the external file
    pub fn file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn build(self) -> TableRef {
        TableRef::new(self.file_name, self.table_name, self.status)
    }

    /// `None` when neither a table nor a file was given
    pub(crate) fn build_opt(self) -> Option<TableRef> {
        if self.file_name.is_none() && self.table_name.is_none() {
            None
        } else {
            Some(self.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let table_ref = TableRef::builder().table("Sheet1").build();
        assert_eq!(table_ref.to_string(), "Sheet1");
        assert!(!table_ref.is_absolute());
    }

    #[test]
    fn test_abs_table_with_space() {
        let table_ref = TableRef::builder().abs_table("my table").build();
        assert_eq!(table_ref.to_string(), "$'my table'");
        assert_eq!(table_ref.status(), ABSOLUTE_TABLE);
    }

    #[test]
    fn test_file_and_table() {
        let table_ref = TableRef::builder().file("f'").abs_table("t't").build();
        assert_eq!(table_ref.to_string(), "'f'''#$'t''t'");
    }

    #[test]
    fn test_file_without_table_renders_empty() {
        let table_ref = TableRef::builder().file("outside.ods").build();
        assert_eq!(table_ref.to_string(), "");
    }

    #[test]
    fn test_new_keeps_table_bit_only() {
        let table_ref = TableRef::new(None, Some("t".into()), 0xFF);
        assert_eq!(table_ref.status(), ABSOLUTE_TABLE);
    }

    #[test]
    fn test_build_opt() {
        assert_eq!(TableRefBuilder::default().build_opt(), None);
        assert!(TableRefBuilder::default().file("f").build_opt().is_some());
    }

    #[test]
    fn test_from_str() {
        let table_ref: TableRef = "'f.ods'#$'a b'".parse().unwrap();
        assert_eq!(table_ref.file_name(), Some("f.ods"));
        assert_eq!(table_ref.table_name(), Some("a b"));
        assert!(table_ref.is_absolute());
    }
}
