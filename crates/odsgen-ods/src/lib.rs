//! # odsgen-ods
//!
//! Document model and ODS package writer for odsgen.

pub mod document;
pub mod error;
pub mod settings;
pub mod style;
pub mod table;
pub mod value;
pub mod writer;

pub use document::Document;
pub use error::{OdsError, OdsResult};
pub use settings::Settings;
pub use style::{Style, StyleDestination, StyleFamily, StylesContainer};
pub use table::{Cell, Table};
pub use value::{CellValue, XsdDouble};
pub use writer::{OdsWriter, OdsWriterOptions};

/// Maximum number of rows in a table (LibreOffice limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a table (LibreOffice limit)
pub const MAX_COLS: u32 = 16_384;
