//! Column index <-> letters codec (0 = A, 25 = Z, 26 = AA, ...)
//!
//! Bijective base 26: each position is a digit in 1..=26, so there is no
//! letter for zero and the codec is a bijection between `u32` indices and
//! non-empty uppercase strings.

use std::fmt;

use crate::error::ParseError;

/// Letters in the alphabet
pub const ALPHABET_SIZE: u32 = 26;

/// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::with_capacity(4);
    // a String sink never fails
    let _ = write_column_letters(col, &mut result);
    result
}

/// Write the letters of a column index to a sink
pub fn write_column_letters<W: fmt::Write + ?Sized>(col: u32, out: &mut W) -> fmt::Result {
    // u32::MAX needs 7 letters
    let mut buf = [0u8; 8];
    let mut start = buf.len();
    let mut n = u64::from(col) + 1;
    while n > 0 {
        n -= 1;
        start -= 1;
        buf[start] = b'A' + (n % u64::from(ALPHABET_SIZE)) as u8;
        n /= u64::from(ALPHABET_SIZE);
    }
    for &b in &buf[start..] {
        out.write_char(b as char)?;
    }
    Ok(())
}

/// Convert uppercase column letters to an index (A = 0, Z = 25, AA = 26, etc.)
pub fn letters_to_column(letters: &str) -> Result<u32, ParseError> {
    let chars: Vec<char> = letters.chars().collect();
    if chars.is_empty() {
        return Err(ParseError::at("Expected letter", &chars, 0));
    }

    let mut acc: u64 = 0;
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            return Err(ParseError::at("Expected letter", &chars, i));
        }
        acc = acc * u64::from(ALPHABET_SIZE) + u64::from(c as u32 - 'A' as u32 + 1);
        if acc - 1 > u64::from(u32::MAX) {
            return Err(ParseError::at("Column index overflow", &chars, i));
        }
    }
    Ok((acc - 1) as u32)
}

/// Adapter so a column index can be used with `{}`
pub struct ColumnLetters(pub u32);

impl fmt::Display for ColumnLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_column_letters(self.0, f)
    }
}
