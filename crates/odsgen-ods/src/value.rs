//! Cell values

use std::fmt;

/// The value of a table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    String(String),
    Float(f64),
    Boolean(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Value of `office:value-type`, `None` for an empty cell
    pub fn value_type(&self) -> Option<&'static str> {
        match self {
            CellValue::Empty => None,
            CellValue::String(_) => Some("string"),
            CellValue::Float(_) => Some("float"),
            CellValue::Boolean(_) => Some("boolean"),
        }
    }
}

/// Text shown in the cell paragraph
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(s) => f.write_str(s),
            CellValue::Float(n) => write!(f, "{}", XsdDouble(*n)),
            CellValue::Boolean(true) => f.write_str("TRUE"),
            CellValue::Boolean(false) => f.write_str("FALSE"),
        }
    }
}

/// A float rendered as an `xsd:double`: `NaN`, `INF` and `-INF` for
/// non-finite values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XsdDouble(pub f64);

impl fmt::Display for XsdDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            f.write_str("NaN")
        } else if n.is_infinite() {
            f.write_str(if n > 0.0 { "INF" } else { "-INF" })
        } else {
            write!(f, "{n}")
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Float(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}
