//! Prelude module - common imports for odsgen users
//!
//! ```rust
//! use odsgen::prelude::*;
//! ```

pub use crate::{
    CellRef,
    // Cell types
    CellValue,
    ConfigItemSet,
    // Main types
    Document,
    // Extension traits
    DocumentExt,
    // Error types
    Error,
    LocalCellRef,
    Mode,
    OdsError,
    OdsResult,
    // I/O types
    OdsWriter,
    OdsWriterOptions,
    // References
    PositionUtil,
    RangeRef,
    Result,
    Style,
    StyleFamily,
    Table,
    TableNameUtil,
    TableRef,
};
