use crate::time::TimeErrors;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum TleErrors {
    MissingLines(usize),
    InvalidLength { line: u8, length: usize },
    NonAscii { line: u8 },
    InvalidLineNumber { line: u8, found: char },
    CatalogMismatch { line1: String, line2: String },
    InvalidField { field: &'static str, text: String },
    ElementOutOfRange { field: &'static str, value: f64 },
    Epoch(TimeErrors),
}

impl fmt::Display for TleErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TleErrors::MissingLines(count) => {
                write!(f, "Expected 2 or 3 element set lines, got {}", count)
            }
            TleErrors::InvalidLength { line, length } => write!(
                f,
                "Line {} has {} characters, expected {}",
                line,
                length,
                crate::constants::TLE_LINE_LENGTH
            ),
            TleErrors::NonAscii { line } => write!(f, "Line {} contains non-ASCII text", line),
            TleErrors::InvalidLineNumber { line, found } => {
                write!(f, "Line {} starts with '{}', expected '{}'", line, found, line)
            }
            TleErrors::CatalogMismatch { line1, line2 } => write!(
                f,
                "Catalog numbers differ between lines: '{}' vs '{}'",
                line1, line2
            ),
            TleErrors::InvalidField { field, text } => {
                write!(f, "Cannot parse {} from '{}'", field, text)
            }
            TleErrors::ElementOutOfRange { field, value } => {
                write!(f, "{} {} is outside its valid range", field, value)
            }
            TleErrors::Epoch(e) => write!(f, "Invalid epoch: {}", e),
        }
    }
}

impl Error for TleErrors {}

impl From<TimeErrors> for TleErrors {
    fn from(err: TimeErrors) -> Self {
        TleErrors::Epoch(err)
    }
}
