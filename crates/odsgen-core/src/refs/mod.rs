//! Cell, range and table references
//!
//! Text forms follow ODF 1.2 part 2, 9.2.1 "Referencing Table Cells":
//! `['<file>'#][$]<table>.[$]<COLUMN>[$]<ROW>[:[$]<COLUMN>[$]<ROW>]`.

mod cell;
mod column;
mod local_cell;
mod parser;
mod position;
mod range;
mod table;
mod table_name;

pub use cell::{CellRef, CellRefBuilder, TABLE_CELL_SEP};
pub use column::{column_to_letters, letters_to_column, write_column_letters, ColumnLetters};
pub use local_cell::{LocalCellAddressParser, LocalCellRef, LocalCellRefBuilder};
pub use parser::{CellAddressParser, RangeAddressParser, TableAddressParser, FILE_TABLE_SEP};
pub use position::PositionUtil;
pub use range::{RangeRef, RangeRefBuilder, RANGE_SEP};
pub use table::{TableRef, TableRefBuilder};
pub use table_name::{TableNameUtil, FORBIDDEN_CHARS, SINGLE_QUOTE};

/// No `$` at all
pub const RELATIVE: u8 = 0;
/// `$` before the column letters
pub const ABSOLUTE_COL: u8 = 1;
/// `$` before the row number
pub const ABSOLUTE_ROW: u8 = 2;
/// `$` before the table name
pub const ABSOLUTE_TABLE: u8 = 4;
