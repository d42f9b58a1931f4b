//! Error types for odsgen-core

use std::fmt;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// A malformed address.
///
/// `position` is the index (in chars) of the offending character; the message
/// repeats the address with that character between brackets, e.g.
/// `Expected digit (not 0) or $: A[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    position: usize,
}

impl ParseError {
    /// Create a parse error with an explicit message
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Create a parse error pointing at the char `index` of `chars`
    pub(crate) fn at(text: &str, chars: &[char], index: usize) -> Self {
        let mut message = String::with_capacity(text.len() + chars.len() + 4);
        message.push_str(text);
        message.push_str(": ");
        message.extend(&chars[..index.min(chars.len())]);
        message.push('[');
        if let Some(c) = chars.get(index) {
            message.push(*c);
        }
        message.push(']');
        if index < chars.len() {
            message.extend(&chars[index + 1..]);
        }
        Self::new(message, index)
    }

    /// The human readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Index of the offending character
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Errors that can occur in odsgen-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed cell, range or table address
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Table name rejected by the name rules
    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    /// A name that must be unique is already taken
    #[error("Element {0} already in list")]
    DuplicateName(String),

    /// Positional access beyond the current bounds
    #[error("Index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Operation not supported by this kind of block
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Write to a frozen container
    #[error("Container is frozen: {0}")]
    Frozen(String),
}

impl Error {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    pub(crate) fn frozen(what: impl fmt::Debug) -> Self {
        Error::Frozen(format!("{what:?}"))
    }
}
