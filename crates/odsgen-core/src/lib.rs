//! # odsgen-core
//!
//! Building blocks for OpenDocument spreadsheet generation:
//! - [`refs`] - cell, range and table references: parsing and rendering
//!   (`'Sheet 1'.$B$3:D5`)
//! - [`util`] - [`Container`], [`MultiContainer`] and [`UniqueList`], used to
//!   deduplicate styles and tables before writing
//! - [`config`] - the `office:settings` tree
//! - [`xml`] - escaping with a bounded, owned cache
//!
//! ## Example
//!
//! ```rust
//! use odsgen_core::{CellRef, PositionUtil};
//!
//! let cell: CellRef = "'Sheet 1'.$B$3".parse().unwrap();
//! assert_eq!((cell.row(), cell.column()), (2, 1));
//! assert_eq!(cell.to_string(), "'Sheet 1'.$B$3");
//!
//! let util = PositionUtil::default();
//! assert_eq!(util.to_range_address(0, 0, 9, 3), "A1:D10");
//! ```

pub mod config;
pub mod error;
pub mod refs;
pub mod util;
pub mod xml;

pub use config::{
    ConfigBlock, ConfigElement, ConfigElementType, ConfigItem, ConfigItemMapEntry,
    ConfigItemMapEntrySequence, ConfigItemMapEntrySet, ConfigItemMapEntrySingleton,
    ConfigItemMapIndexed, ConfigItemMapNamed, ConfigItemSet,
};
pub use error::{Error, ParseError, Result};
pub use refs::{
    column_to_letters, letters_to_column, CellAddressParser, CellRef, CellRefBuilder,
    LocalCellAddressParser, LocalCellRef, LocalCellRefBuilder, PositionUtil, RangeAddressParser,
    RangeRef, RangeRefBuilder, TableAddressParser, TableNameUtil, TableRef, TableRefBuilder,
};
pub use util::{Container, Destination, Mode, MultiContainer, NamedObject, UniqueList};
pub use xml::{EscaperOptions, XmlEscaper, XmlUtil};
