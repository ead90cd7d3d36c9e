use std::error;
use std::fmt;

use crate::source_loc::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    // The input produced no tokens at all.
    EmptyInput,
    // More than one token but no operator to split on, e.g. two adjacent
    // numbers.
    NoOperatorFound {
        loc: SourceLoc,
    },
    // An operator with nothing on one side of it, e.g. "1 +".
    MissingOperand {
        loc: SourceLoc,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::EmptyInput => {
                write!(f, "empty input: expression contains no tokens")
            }
            ParseError::NoOperatorFound { loc } => {
                write!(f, "word {}: no operator found between values", loc.word)
            }
            ParseError::MissingOperand { loc } => {
                write!(f, "word {}: operator is missing an operand", loc.word)
            }
        }
    }
}

impl error::Error for ParseError {}
