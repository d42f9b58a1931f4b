//! Table name checks, sanitizing and quoting

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, ParseError, Result};

/// The quote used around table and file names
pub const SINGLE_QUOTE: char = '\'';

/// Characters LibreOffice refuses in a table name
pub const FORBIDDEN_CHARS: &str = "[]*?:/\\";

/// Checks, sanitizes and escapes table names.
///
/// Escaping follows ODF 9.2.1 "Referencing Table Cells": a name containing
/// blanks, dots or apostrophes is quoted with apostrophes, and apostrophes
/// inside are doubled. Names containing `#` or `$` are quoted as well, so
/// that a rendered reference parses back to the same table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableNameUtil;

impl TableNameUtil {
    /// Create a new util
    pub fn new() -> Self {
        Self
    }

    /// Check that a table name is accepted by LibreOffice (duplicates aside).
    ///
    /// A valid name is not empty, does not start with `'` and contains none of
    /// `[ ] * ? : / \`.
    pub fn check_table_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidTableName(
                "Table name should not be empty".into(),
            ));
        }
        if name.starts_with(SINGLE_QUOTE) {
            return Err(Error::InvalidTableName(format!(
                "Table name should not start with {SINGLE_QUOTE}: {name}"
            )));
        }
        if name.chars().any(is_forbidden) {
            return Err(Error::InvalidTableName(format!(
                "Table name should not contain {FORBIDDEN_CHARS}: {name}"
            )));
        }
        Ok(())
    }

    /// Replace every forbidden char by `_`, and a leading quote by `_`.
    ///
    /// The result always passes [`check_table_name`](Self::check_table_name);
    /// an empty name becomes `_`.
    pub fn sanitize_table_name(&self, name: &str) -> String {
        if name.is_empty() {
            return "_".into();
        }
        name.chars()
            .enumerate()
            .map(|(i, c)| {
                if is_forbidden(c) || (i == 0 && c == SINGLE_QUOTE) {
                    '_'
                } else {
                    c
                }
            })
            .collect()
    }

    /// Quote the name if needed, doubling inner quotes
    pub fn escape_table_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if !needs_quotes(name) {
            return Cow::Borrowed(name);
        }
        let mut escaped = String::with_capacity(name.len() + 4);
        // a String sink never fails
        let _ = write_quoted(name, &mut escaped);
        Cow::Owned(escaped)
    }

    /// Write the escaped name to a sink
    pub fn write_escaped<W: fmt::Write + ?Sized>(&self, name: &str, out: &mut W) -> fmt::Result {
        if needs_quotes(name) {
            write_quoted(name, out)
        } else {
            out.write_str(name)
        }
    }

    /// Remove the surrounding quotes of a name and undouble the inner ones.
    ///
    /// An unquoted name is returned as is, unless it contains a quote.
    pub fn unescape_quotes(&self, name: &str) -> std::result::Result<String, ParseError> {
        let chars: Vec<char> = name.chars().collect();
        let quoted = chars.len() >= 2
            && chars[0] == SINGLE_QUOTE
            && chars[chars.len() - 1] == SINGLE_QUOTE;
        if !quoted {
            return match chars.iter().position(|&c| c == SINGLE_QUOTE) {
                Some(i) => Err(ParseError::at("Unquoted name", &chars, i)),
                None => Ok(name.to_string()),
            };
        }

        let inner = &chars[1..chars.len() - 1];
        let mut unescaped = String::with_capacity(inner.len());
        let mut i = 0;
        while i < inner.len() {
            let c = inner[i];
            if c == SINGLE_QUOTE {
                if inner.get(i + 1) != Some(&SINGLE_QUOTE) {
                    return Err(ParseError::at("Missing closing quote", &chars, i + 1));
                }
                i += 1;
            }
            unescaped.push(c);
            i += 1;
        }
        Ok(unescaped)
    }
}

fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARS.contains(c)
}

fn needs_quotes(name: &str) -> bool {
    name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '.' | SINGLE_QUOTE | '#' | '$'))
}

pub(crate) fn write_quoted<W: fmt::Write + ?Sized>(name: &str, out: &mut W) -> fmt::Result {
    out.write_char(SINGLE_QUOTE)?;
    for c in name.chars() {
        out.write_char(c)?;
        if c == SINGLE_QUOTE {
            out.write_char(SINGLE_QUOTE)?;
        }
    }
    out.write_char(SINGLE_QUOTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn util() -> TableNameUtil {
        TableNameUtil::new()
    }

    #[test]
    fn test_check_quote_at_first_place() {
        let err = util().check_table_name("'quote at first place").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid table name: Table name should not start with ': 'quote at first place"
        );
    }

    #[test]
    fn test_check_quote_at_second_place() {
        util().check_table_name(" 'quote at second place").unwrap();
        util().check_table_name("no problem").unwrap();
    }

    #[test]
    fn test_check_forbidden_chars() {
        for c in FORBIDDEN_CHARS.chars() {
            let name = format!("a name with {c}");
            match util().check_table_name(&name) {
                Err(Error::InvalidTableName(msg)) => {
                    assert_eq!(msg, format!("Table name should not contain []*?:/\\: {name}"))
                }
                other => panic!("expected an invalid name error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_check_empty() {
        assert!(util().check_table_name("").is_err());
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(util().sanitize_table_name("a[b]c*d?e:f/g\\h"), "a_b_c_d_e_f_g_h");
        assert_eq!(util().sanitize_table_name("'quoted' name"), "_quoted' name");
        assert_eq!(util().sanitize_table_name("fine"), "fine");
        assert_eq!(util().sanitize_table_name(""), "_");
        for name in ["'x", "[*]", "'", "a/b"] {
            let sanitized = util().sanitize_table_name(name);
            util().check_table_name(&sanitized).unwrap();
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(util().escape_table_name("no_problem"), "no_problem");
        assert_eq!(util().escape_table_name("a space"), "'a space'");
        assert_eq!(util().escape_table_name("a ' quote"), "'a '' quote'");
        assert_eq!(util().escape_table_name("two ' ' quotes"), "'two '' '' quotes'");
        assert_eq!(util().escape_table_name("a\nnewline"), "'a\nnewline'");
        assert_eq!(util().escape_table_name("a.dot"), "'a.dot'");
        assert_eq!(util().escape_table_name("a#hash"), "'a#hash'");
        assert_eq!(util().escape_table_name("$dollar"), "'$dollar'");
        assert_eq!(util().escape_table_name(""), "''");
    }

    #[test]
    fn test_escape_borrows_when_possible() {
        assert!(matches!(util().escape_table_name("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(util().unescape_quotes("plain").unwrap(), "plain");
        assert_eq!(util().unescape_quotes("'a space'").unwrap(), "a space");
        assert_eq!(util().unescape_quotes("'it''s'").unwrap(), "it's");
        assert_eq!(util().unescape_quotes("''").unwrap(), "");
        assert!(util().unescape_quotes("it's").is_err());
        assert!(util().unescape_quotes("'it's'").is_err());
    }
}
