//! Cell position inside a table: `[$]LETTERS[$]DIGITS`

use std::fmt;
use std::str::FromStr;

use super::column::{write_column_letters, ALPHABET_SIZE};
use super::{ABSOLUTE_COL, ABSOLUTE_ROW, RELATIVE};
use crate::error::ParseError;

/// A cell address without table or file, e.g. `$B3`.
///
/// Row and column are 0-based. `status` is a bitmask of
/// [`ABSOLUTE_COL`] and [`ABSOLUTE_ROW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalCellRef {
    row: u32,
    column: u32,
    status: u8,
}

impl LocalCellRef {
    /// Create a new local reference; bits other than the row/column bits are dropped
    pub fn new(row: u32, column: u32, status: u8) -> Self {
        Self {
            row,
            column,
            status: status & (ABSOLUTE_COL | ABSOLUTE_ROW),
        }
    }

    /// Start a builder
    pub fn builder() -> LocalCellRefBuilder {
        LocalCellRefBuilder::default()
    }

    /// 0-based row
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 0-based column
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Status bitmask
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Is the row marked with `$`?
    pub fn is_absolute_row(&self) -> bool {
        self.status & ABSOLUTE_ROW != 0
    }

    /// Is the column marked with `$`?
    pub fn is_absolute_column(&self) -> bool {
        self.status & ABSOLUTE_COL != 0
    }

    /// Write the canonical address to a sink
    pub fn write<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        if self.is_absolute_column() {
            out.write_char('$')?;
        }
        write_column_letters(self.column, out)?;
        if self.is_absolute_row() {
            out.write_char('$')?;
        }
        write!(out, "{}", u64::from(self.row) + 1)
    }
}

impl fmt::Display for LocalCellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl FromStr for LocalCellRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocalCellAddressParser::new().parse(s)
    }
}

/// Builder for [`LocalCellRef`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCellRefBuilder {
    row: u32,
    column: u32,
    status: u8,
}

impl LocalCellRefBuilder {
    /// Set a relative row
    pub fn row(mut self, row: u32) -> Self {
        self.row = row;
        self.status &= !ABSOLUTE_ROW;
        self
    }

    /// Set an absolute row
    pub fn abs_row(mut self, row: u32) -> Self {
        self.row = row;
        self.status |= ABSOLUTE_ROW;
        self
    }

    /// Set a relative column
    pub fn column(mut self, column: u32) -> Self {
        self.column = column;
        self.status &= !ABSOLUTE_COL;
        self
    }

    /// Set an absolute column
    pub fn abs_column(mut self, column: u32) -> Self {
        self.column = column;
        self.status |= ABSOLUTE_COL;
        self
    }

    pub fn build(self) -> LocalCellRef {
        LocalCellRef::new(self.row, self.column, self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BeginColumn,
    FirstLetter,
    OptSecondLetter,
    BeginRow,
    FirstDigit,
    OptDigit,
}

/// Parser for `[$]LETTERS[$]DIGITS`, case insensitive.
///
/// Fails at the first unexpected character; rows start at 1, so a row
/// beginning with `0` is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCellAddressParser;

impl LocalCellAddressParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a local address
    pub fn parse(&self, address: &str) -> Result<LocalCellRef, ParseError> {
        let chars: Vec<char> = address.to_ascii_uppercase().chars().collect();
        let mut state = State::BeginColumn;
        let mut status = RELATIVE;
        let mut column: u64 = 0;
        let mut row: u64 = 0;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match state {
                State::BeginColumn => {
                    if c == '$' {
                        status |= ABSOLUTE_COL;
                        state = State::FirstLetter;
                    } else if c.is_ascii_uppercase() {
                        column = push_letter(column, c, &chars, i)?;
                        state = State::OptSecondLetter;
                    } else {
                        return Err(ParseError::at("Expected letter or $", &chars, i));
                    }
                    i += 1;
                }
                State::FirstLetter => {
                    if !c.is_ascii_uppercase() {
                        return Err(ParseError::at("Expected letter", &chars, i));
                    }
                    column = push_letter(column, c, &chars, i)?;
                    state = State::OptSecondLetter;
                    i += 1;
                }
                State::OptSecondLetter => {
                    if c.is_ascii_uppercase() {
                        column = push_letter(column, c, &chars, i)?;
                        i += 1;
                    } else {
                        // not consumed
                        state = State::BeginRow;
                    }
                }
                State::BeginRow => {
                    if c == '$' {
                        status |= ABSOLUTE_ROW;
                        state = State::FirstDigit;
                    } else if is_first_digit(c) {
                        row = push_digit(row, c, &chars, i)?;
                        state = State::OptDigit;
                    } else {
                        return Err(ParseError::at("Expected digit (not 0) or $", &chars, i));
                    }
                    i += 1;
                }
                State::FirstDigit => {
                    if !is_first_digit(c) {
                        return Err(ParseError::at("Expected digit (not 0)", &chars, i));
                    }
                    row = push_digit(row, c, &chars, i)?;
                    state = State::OptDigit;
                    i += 1;
                }
                State::OptDigit => {
                    if !c.is_ascii_digit() {
                        return Err(ParseError::at("Expected digit", &chars, i));
                    }
                    row = push_digit(row, c, &chars, i)?;
                    i += 1;
                }
            }
        }

        match state {
            State::OptDigit => Ok(LocalCellRef::new(
                (row - 1) as u32,
                (column - 1) as u32,
                status,
            )),
            State::BeginColumn | State::FirstLetter => Err(ParseError::at(
                "Address too short, expected letter",
                &chars,
                chars.len(),
            )),
            State::OptSecondLetter | State::BeginRow | State::FirstDigit => Err(ParseError::at(
                "Address too short, expected digit",
                &chars,
                chars.len(),
            )),
        }
    }
}

fn is_first_digit(c: char) -> bool {
    matches!(c, '1'..='9')
}

/// Accumulate a letter, bijective base 26
fn push_letter(acc: u64, c: char, chars: &[char], i: usize) -> Result<u64, ParseError> {
    let acc = acc * u64::from(ALPHABET_SIZE) + u64::from(c as u32 - 'A' as u32 + 1);
    if acc - 1 > u64::from(u32::MAX) {
        return Err(ParseError::at("Column index overflow", chars, i));
    }
    Ok(acc)
}

/// Accumulate a decimal digit of the 1-based row
fn push_digit(acc: u64, c: char, chars: &[char], i: usize) -> Result<u64, ParseError> {
    let acc = acc * 10 + u64::from(c as u32 - '0' as u32);
    if acc - 1 > u64::from(u32::MAX) {
        return Err(ParseError::at("Row index overflow", chars, i));
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(s: &str) -> Result<LocalCellRef, ParseError> {
        LocalCellAddressParser::new().parse(s)
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!(parse("A2").unwrap(), LocalCellRef::new(1, 0, 0));
        assert_eq!(parse("$B3").unwrap(), LocalCellRef::new(2, 1, 1));
        assert_eq!(parse("C$4").unwrap(), LocalCellRef::new(3, 2, 2));
        assert_eq!(parse("$D$5").unwrap(), LocalCellRef::new(4, 3, 3));
        assert_eq!(parse("XFD1048576").unwrap(), LocalCellRef::new(1048575, 16383, 0));
    }

    #[test]
    fn test_parse_lowercase() {
        assert_eq!(parse("$ab$10").unwrap(), LocalCellRef::new(9, 27, 3));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("A0").unwrap_err().message(),
            "Expected digit (not 0) or $: A[0]"
        );
        assert_eq!(parse("0A").unwrap_err().message(), "Expected letter or $: [0]A");
        assert_eq!(parse("A1A").unwrap_err().message(), "Expected digit: A1[A]");
        assert_eq!(
            parse("$D$").unwrap_err().message(),
            "Address too short, expected digit: $D$[]"
        );
        assert_eq!(
            parse("$D$0").unwrap_err().message(),
            "Expected digit (not 0): $D$[0]"
        );
        assert_eq!(parse("$$B6").unwrap_err().message(), "Expected letter: $[$]B6");
        assert_eq!(
            parse("").unwrap_err().message(),
            "Address too short, expected letter: []"
        );
        assert_eq!(
            parse("$").unwrap_err().message(),
            "Address too short, expected letter: $[]"
        );
        assert_eq!(
            parse("AB").unwrap_err().message(),
            "Address too short, expected digit: AB[]"
        );
    }

    #[test]
    fn test_parse_error_position() {
        assert_eq!(parse("A1A").unwrap_err().position(), 2);
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(parse("A4294967296").unwrap(), LocalCellRef::new(u32::MAX, 0, 0));
        assert!(parse("A4294967297").is_err());
        assert!(parse("MWLQKWW1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LocalCellRef::new(1, 0, 0).to_string(), "A2");
        assert_eq!(LocalCellRef::new(4, 3, 3).to_string(), "$D$5");
        assert_eq!(LocalCellRef::new(u32::MAX, 0, 2).to_string(), "A$4294967296");
    }

    #[test]
    fn test_builder() {
        let cell = LocalCellRef::builder().abs_row(10).column(3).build();
        assert_eq!(cell, LocalCellRef::new(10, 3, ABSOLUTE_ROW));
        assert_eq!(cell.to_string(), "D$11");
        assert!(cell.is_absolute_row());
        assert!(!cell.is_absolute_column());

        let cell = LocalCellRef::builder().abs_column(2).abs_row(0).row(5).build();
        assert_eq!(cell.to_string(), "$C6");
    }

    #[test]
    fn test_new_drops_unknown_bits() {
        assert_eq!(LocalCellRef::new(0, 0, 0xFF).status(), 3);
    }

    #[test]
    fn test_from_str() {
        let cell: LocalCellRef = "b$7".parse().unwrap();
        assert_eq!(cell.to_string(), "B$7");
    }

    proptest! {
        #[test]
        fn prop_round_trip(row in 0u32..16384, column in 0u32..1024, status in 0u8..4) {
            let cell = LocalCellRef::new(row, column, status);
            prop_assert_eq!(parse(&cell.to_string()).unwrap(), cell);
        }
    }
}
