use std::fmt;

/// A malformed input line. The line is skipped and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingField {
        line: usize,
        field: &'static str,
    },
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingField { line, .. } | ParseError::InvalidNumber { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingField { line, field } => {
                write!(f, "line {}: missing {}", line, field)
            }
            ParseError::InvalidNumber { line, field, value } => {
                write!(f, "line {}: {} is not a number: {:?}", line, field, value)
            }
        }
    }
}

impl std::error::Error for ParseError {}
