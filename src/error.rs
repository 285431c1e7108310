/*
    Errors
*/

use std::fmt;

/// Error returned when a string does not name a rounding mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseModeError {
    /// The input was empty (or only whitespace).
    Empty,
    /// The input is not one of `rd`, `rn`, `ru`, `rz`
    /// or their long forms `down`, `nearest`, `up`, `zero`.
    Unknown(String),
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseModeError::Empty => write!(f, "empty rounding mode"),
            ParseModeError::Unknown(s) => write!(
                f,
                "unknown rounding mode `{}`: expected one of rd, rn, ru, rz",
                s
            ),
        }
    }
}

impl std::error::Error for ParseModeError {}
