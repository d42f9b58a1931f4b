//! Parsers for table, cell and range addresses
//!
//! Grammar:
//!
//! ```text
//! table := ['<file>'#][$]<name>
//! cell  := [table.]<local>
//! range := [table.]<local>:<local>
//! ```
//!
//! A name is either bare (no `.`, `#` nor `'`) or quoted with `'`, inner
//! quotes doubled.

use super::cell::{CellRef, TABLE_CELL_SEP};
use super::local_cell::LocalCellAddressParser;
use super::range::{RangeRef, RANGE_SEP};
use super::table::TableRef;
use super::table_name::{TableNameUtil, SINGLE_QUOTE};
use super::{ABSOLUTE_TABLE, RELATIVE};
use crate::error::ParseError;

/// Separator between the file and the table
pub const FILE_TABLE_SEP: char = '#';

const ABSOLUTE_MARK: char = '$';

/// Parser for the `['<file>'#][$]<table>` part of an address
#[derive(Debug, Clone, Copy, Default)]
pub struct TableAddressParser {
    table_name_util: TableNameUtil,
}

impl TableAddressParser {
    pub fn new(table_name_util: TableNameUtil) -> Self {
        Self { table_name_util }
    }

    /// Parse a standalone table reference, e.g. `'f.ods'#$Sheet1`
    pub fn parse(&self, address: &str) -> Result<TableRef, ParseError> {
        let chars: Vec<char> = address.chars().collect();
        let (table_ref, _) = self.scan(&chars, true)?;
        Ok(table_ref)
    }

    /// Parse the optional prefix of a cell or range address.
    ///
    /// Returns the table reference and the index of the first char of the
    /// local part.
    pub(crate) fn parse_prefix(
        &self,
        chars: &[char],
    ) -> Result<(Option<TableRef>, usize), ParseError> {
        let has_prefix = chars
            .iter()
            .any(|&c| c == TABLE_CELL_SEP || c == FILE_TABLE_SEP || c == SINGLE_QUOTE);
        if !has_prefix {
            return Ok((None, 0));
        }
        let (table_ref, end) = self.scan(chars, false)?;
        Ok((Some(table_ref), end))
    }

    /// Scan `['<file>'#][$]<table>` followed by a `.`, or by the end of
    /// input if `standalone`. Returns the index after the `.`.
    fn scan(&self, chars: &[char], standalone: bool) -> Result<(TableRef, usize), ParseError> {
        let mut pos = 0;
        let mut file_name = None;
        loop {
            let absolute = chars.get(pos) == Some(&ABSOLUTE_MARK);
            let start = if absolute { pos + 1 } else { pos };
            let end = self.segment_end(chars, start, standalone)?;
            match chars.get(end) {
                Some(&FILE_TABLE_SEP) => {
                    if file_name.is_some() {
                        return Err(ParseError::at("Unexpected second #", chars, end));
                    }
                    if absolute {
                        return Err(ParseError::at("Unexpected $ before file name", chars, pos));
                    }
                    file_name = Some(self.unescape(chars, start, end)?);
                    pos = end + 1;
                }
                Some(&TABLE_CELL_SEP) if standalone => {
                    return Err(ParseError::at("Unexpected .", chars, end));
                }
                _ => {
                    if start == end {
                        return Err(ParseError::at("Expected table name", chars, end));
                    }
                    let table_name = self.unescape(chars, start, end)?;
                    let status = if absolute { ABSOLUTE_TABLE } else { RELATIVE };
                    let table_ref = TableRef::new(file_name, Some(table_name), status);
                    return Ok((table_ref, (end + 1).min(chars.len())));
                }
            }
        }
    }

    /// Index of the separator that ends the name starting at `start`
    fn segment_end(
        &self,
        chars: &[char],
        start: usize,
        standalone: bool,
    ) -> Result<usize, ParseError> {
        let mut i = start;
        if chars.get(start) == Some(&SINGLE_QUOTE) {
            i += 1;
            loop {
                match chars.get(i) {
                    None => return Err(ParseError::at("Missing closing quote", chars, i)),
                    Some(&SINGLE_QUOTE) if chars.get(i + 1) == Some(&SINGLE_QUOTE) => i += 2,
                    Some(&SINGLE_QUOTE) => {
                        i += 1;
                        break;
                    }
                    Some(_) => i += 1,
                }
            }
            return match chars.get(i) {
                Some(&TABLE_CELL_SEP) | Some(&FILE_TABLE_SEP) => Ok(i),
                None if standalone => Ok(i),
                _ => Err(ParseError::at("Expected . or # after quoted name", chars, i)),
            };
        }

        while let Some(&c) = chars.get(i) {
            match c {
                TABLE_CELL_SEP | FILE_TABLE_SEP => return Ok(i),
                SINGLE_QUOTE => return Err(ParseError::at("Unexpected quote", chars, i)),
                _ => i += 1,
            }
        }
        if standalone {
            Ok(i)
        } else {
            Err(ParseError::at("Expected . or #", chars, i))
        }
    }

    fn unescape(&self, chars: &[char], start: usize, end: usize) -> Result<String, ParseError> {
        let raw: String = chars[start..end].iter().collect();
        self.table_name_util
            .unescape_quotes(&raw)
            .map_err(|e| ParseError::new(e.message(), start + e.position()))
    }
}

/// Parser for `[table.]<local>`
#[derive(Debug, Clone, Copy, Default)]
pub struct CellAddressParser {
    table_address_parser: TableAddressParser,
    local_cell_address_parser: LocalCellAddressParser,
}

impl CellAddressParser {
    pub fn create(table_name_util: TableNameUtil) -> Self {
        Self {
            table_address_parser: TableAddressParser::new(table_name_util),
            local_cell_address_parser: LocalCellAddressParser::new(),
        }
    }

    /// Parse a cell address, e.g. `'Sheet 1'.$B$3`
    pub fn parse(&self, address: &str) -> Result<CellRef, ParseError> {
        let chars: Vec<char> = address.chars().collect();
        let (table_ref, start) = self.table_address_parser.parse_prefix(&chars)?;
        let local: String = chars[start..].iter().collect();
        let local_cell_ref = self.local_cell_address_parser.parse(&local)?;
        Ok(CellRef::new(table_ref, local_cell_ref))
    }
}

/// Parser for `[table.]<local>:<local>`
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeAddressParser {
    table_address_parser: TableAddressParser,
    local_cell_address_parser: LocalCellAddressParser,
}

impl RangeAddressParser {
    pub fn create(table_name_util: TableNameUtil) -> Self {
        Self {
            table_address_parser: TableAddressParser::new(table_name_util),
            local_cell_address_parser: LocalCellAddressParser::new(),
        }
    }

    /// Parse a range address, e.g. `Sheet1.A1:$D$3`.
    ///
    /// The second cell never has a table prefix.
    pub fn parse(&self, address: &str) -> Result<RangeRef, ParseError> {
        let chars: Vec<char> = address.chars().collect();
        let (table_ref, start) = self.table_address_parser.parse_prefix(&chars)?;
        let local: String = chars[start..].iter().collect();
        let Some((from, to)) = local.split_once(RANGE_SEP) else {
            return Err(ParseError::new(
                format!("Expected a `:` symbol: {local}"),
                chars.len(),
            ));
        };
        let from = self.local_cell_address_parser.parse(from)?;
        let to = self.local_cell_address_parser.parse(to)?;
        Ok(RangeRef::new(table_ref, from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refs::LocalCellRef;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn cell(address: &str) -> Result<CellRef, ParseError> {
        CellAddressParser::create(TableNameUtil::new()).parse(address)
    }

    fn range(address: &str) -> Result<RangeRef, ParseError> {
        RangeAddressParser::create(TableNameUtil::new()).parse(address)
    }

    fn table(address: &str) -> Result<TableRef, ParseError> {
        TableAddressParser::new(TableNameUtil::new()).parse(address)
    }

    #[test]
    fn test_cell_literals() {
        assert_eq!(cell("A2").unwrap(), CellRef::create(1, 0, 0));
        assert_eq!(cell("$B3").unwrap(), CellRef::create(2, 1, 1));
        assert_eq!(cell("C$4").unwrap(), CellRef::create(3, 2, 2));
        assert_eq!(cell("$D$5").unwrap(), CellRef::create(4, 3, 3));
    }

    #[test]
    fn test_cell_with_file_and_table() {
        let expected = CellRef::new(
            Some(TableRef::new(Some("f'".into()), Some("t't".into()), ABSOLUTE_TABLE)),
            LocalCellRef::new(2, 3, 3),
        );
        assert_eq!(cell("'f'''#$'t''t'.$D$3").unwrap(), expected);
    }

    #[test]
    fn test_cell_with_dollar_inside_quoted_table() {
        // the `$` is part of the quoted name, not an absolute mark
        let expected = CellRef::new(
            Some(TableRef::new(Some("f'".into()), Some("$t't".into()), RELATIVE)),
            LocalCellRef::new(2, 3, 3),
        );
        let parsed = cell("'f'''#'$t''t'.$D$3").unwrap();
        assert_eq!(parsed, expected);
        assert!(!parsed.table_ref().unwrap().is_absolute());
    }

    #[test]
    fn test_cell_with_bare_table() {
        let parsed = cell("Sheet1.b2").unwrap();
        assert_eq!(parsed.table_ref().and_then(|t| t.table_name()), Some("Sheet1"));
        assert_eq!(parsed.to_string(), "Sheet1.B2");
    }

    #[test]
    fn test_cell_dollar_inside_quotes_is_literal() {
        let parsed = cell("'$t'.A1").unwrap();
        let table_ref = parsed.table_ref().unwrap();
        assert_eq!(table_ref.table_name(), Some("$t"));
        assert!(!table_ref.is_absolute());
    }

    #[test]
    fn test_cell_quote_errors() {
        assert!(cell("'f'f'#t.D3").is_err());
        assert!(cell("'f''#t.D3").is_err());
        assert!(cell("f'f#t.D3").is_err());
        assert_eq!(
            cell("f'f#t.D3").unwrap_err().message(),
            "Unexpected quote: f[']f#t.D3"
        );
    }

    #[test]
    fn test_cell_prefix_errors() {
        assert_eq!(cell(".A1").unwrap_err().message(), "Expected table name: [.]A1");
        assert!(cell("f#.A1").is_err());
        assert!(cell("a#b#c.A1").is_err());
        assert!(cell("$'f'#t.A1").is_err());
        assert!(cell("A1#").is_err());
        assert!(cell("t.").is_err());
    }

    #[test]
    fn test_cell_local_errors() {
        assert_eq!(
            cell("$D$").unwrap_err().message(),
            "Address too short, expected digit: $D$[]"
        );
        assert_eq!(
            cell("$D@$5").unwrap_err().message(),
            "Expected digit (not 0) or $: $D[@]$5"
        );
        assert_eq!(cell("A0").unwrap_err().message(), "Expected digit (not 0) or $: A[0]");
        assert_eq!(cell("0A").unwrap_err().message(), "Expected letter or $: [0]A");
        assert_eq!(cell("A1A").unwrap_err().message(), "Expected digit: A1[A]");
    }

    #[test]
    fn test_range_literals() {
        let a1 = LocalCellRef::new(0, 0, 0);
        assert_eq!(
            range("A1:A2").unwrap(),
            RangeRef::new(None, a1, LocalCellRef::new(1, 0, 0))
        );
        assert_eq!(
            range("A1:$D$5").unwrap(),
            RangeRef::new(None, a1, LocalCellRef::new(4, 3, 3))
        );
    }

    #[test]
    fn test_range_with_file_and_table() {
        let expected = RangeRef::new(
            Some(TableRef::new(Some("f'".into()), Some("t't".into()), ABSOLUTE_TABLE)),
            LocalCellRef::new(0, 0, 0),
            LocalCellRef::new(2, 3, 3),
        );
        assert_eq!(range("'f'''#$'t''t'.A1:$D$3").unwrap(), expected);
    }

    #[test]
    fn test_range_errors() {
        assert_eq!(
            range("$D$").unwrap_err().message(),
            "Expected a `:` symbol: $D$"
        );
        assert_eq!(
            range("A1:$D@$5").unwrap_err().message(),
            "Expected digit (not 0) or $: $D[@]$5"
        );
        assert!(range("A1:A0").is_err());
        assert!(range("A1:0A").is_err());
        assert!(range("A1:A1A").is_err());
        assert!(range("'f'f'#t.A1:D3").is_err());
        assert!(range("'f''#t.A1:D3").is_err());
        assert!(range("f'f#t.A1:D3").is_err());
        // the second cell is local only
        assert!(range("t.A1:t.B2").is_err());
    }

    #[test]
    fn test_table_standalone() {
        assert_eq!(table("Sheet1").unwrap().table_name(), Some("Sheet1"));
        assert_eq!(table("''").unwrap().table_name(), Some(""));
        assert!(table("$Sheet1").unwrap().is_absolute());
        assert!(table("Sheet1.A1").is_err());
        assert!(table("'a b'c").is_err());
        assert!(table("").is_err());
    }

    fn table_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 '.#$_-]{0,12}"
    }

    proptest! {
        #[test]
        fn prop_cell_round_trip(
            name in proptest::option::of(table_name()),
            file in proptest::option::of("[a-z '#./]{1,10}"),
            abs_table in any::<bool>(),
            row in 0u32..16384,
            column in 0u32..1024,
            status in 0u8..4,
        ) {
            let table_ref = name.map(|name| {
                let status = if abs_table { ABSOLUTE_TABLE } else { RELATIVE };
                TableRef::new(file, Some(name), status)
            });
            let cell_ref = CellRef::new(table_ref, LocalCellRef::new(row, column, status));
            prop_assert_eq!(cell(&cell_ref.to_string()).unwrap(), cell_ref);
        }

        #[test]
        fn prop_range_round_trip(
            name in proptest::option::of(table_name()),
            abs_table in any::<bool>(),
            from in (0u32..16384, 0u32..1024, 0u8..4),
            to in (0u32..16384, 0u32..1024, 0u8..4),
        ) {
            let table_ref = name.map(|name| {
                let status = if abs_table { ABSOLUTE_TABLE } else { RELATIVE };
                TableRef::new(None, Some(name), status)
            });
            let range_ref = RangeRef::new(
                table_ref,
                LocalCellRef::new(from.0, from.1, from.2),
                LocalCellRef::new(to.0, to.1, to.2),
            );
            prop_assert_eq!(range(&range_ref.to_string()).unwrap(), range_ref);
        }

        #[test]
        fn prop_table_round_trip(
            name in table_name(),
            file in proptest::option::of("[a-z '#./]{1,10}"),
            abs_table in any::<bool>(),
        ) {
            let status = if abs_table { ABSOLUTE_TABLE } else { RELATIVE };
            let table_ref = TableRef::new(file, Some(name), status);
            prop_assert_eq!(table(&table_ref.to_string()).unwrap(), table_ref);
        }
    }
}
