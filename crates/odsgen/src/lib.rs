//! # odsgen
//!
//! A Rust library for generating OpenDocument spreadsheets (`.ods`).
//!
//! ## Features
//!
//! - Parse and format cell, range and table addresses (`'Sheet 1'.$B$3`, `A1:C10`)
//! - Validate, sanitize and escape table names
//! - Build the `settings.xml` config tree
//! - Write ODS packages
//!
//! ## Example
//!
//! ```rust
//! use odsgen::prelude::*;
//!
//! let mut document = Document::new();
//! let table = document.add_table("Sheet1").unwrap();
//! table.set_cell(0, 0, "Hello").unwrap();
//! table.set_cell(0, 1, 42.0).unwrap();
//! document.set_cell_at("Sheet1.C1", true).unwrap();
//!
//! let mut buffer = std::io::Cursor::new(Vec::new());
//! OdsWriter::write(&document, &mut buffer).unwrap();
//! // document.save("output.ods").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use odsgen_core::{
    column_to_letters,
    letters_to_column,
    // Parsers
    CellAddressParser,
    CellRef,
    CellRefBuilder,
    // Config tree
    ConfigBlock,
    ConfigElement,
    ConfigElementType,
    ConfigItem,
    ConfigItemMapEntry,
    ConfigItemMapEntrySequence,
    ConfigItemMapEntrySet,
    ConfigItemMapEntrySingleton,
    ConfigItemMapIndexed,
    ConfigItemMapNamed,
    ConfigItemSet,
    // Containers
    Container,
    Destination,
    // Error types
    Error,
    EscaperOptions,
    LocalCellAddressParser,
    LocalCellRef,
    LocalCellRefBuilder,
    Mode,
    MultiContainer,
    NamedObject,
    ParseError,
    // References
    PositionUtil,
    RangeAddressParser,
    RangeRef,
    RangeRefBuilder,
    Result,
    TableAddressParser,
    TableNameUtil,
    TableRef,
    TableRefBuilder,
    UniqueList,
    XmlEscaper,
    XmlUtil,
};

// Re-export document and I/O types
pub use odsgen_ods::{
    Cell, CellValue, Document, OdsError, OdsResult, OdsWriter, OdsWriterOptions, Settings,
    Style, StyleDestination, StyleFamily, StylesContainer, Table,
};

use std::path::Path;

/// Extension trait for Document to add file I/O
pub trait DocumentExt {
    /// Save the document to a `.ods` file
    fn save<P: AsRef<Path>>(&self, path: P) -> OdsResult<()>;
}

impl DocumentExt for Document {
    fn save<P: AsRef<Path>>(&self, path: P) -> OdsResult<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("ods") => OdsWriter::write_file(self, path),
            _ => Err(OdsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
