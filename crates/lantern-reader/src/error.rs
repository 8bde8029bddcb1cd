use std::fmt;

/// A syntax error while reading an S-expression document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}

/// A well-formed document whose contents do not match what the caller asked for.
///
/// Produced by [`ReaderMapping`](crate::ReaderMapping) getters when a key is
/// present but holds the wrong kind of value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderError {
    pub key: String,
    pub message: String,
}

impl ReaderError {
    pub(crate) fn new(key: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { key: key.into(), message: msg.into() }
    }
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for '{}': {}", self.key, self.message)
    }
}

impl std::error::Error for ReaderError {}
