use std::error;
use std::fmt;

use crate::source_loc::*;

// Result of evaluating an expression.  Operations on two integers stay
// integral; any float operand promotes the operation to f64.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    IntVal(i64),
    FloatVal(f64),
}

use self::Value::*;

impl Value {
    pub fn as_f64(&self) -> f64 {
        match self {
            IntVal(x) => *x as f64,
            FloatVal(x) => *x,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            IntVal(x) => *x == 0,
            // Covers -0.0 as well.
            FloatVal(x) => *x == 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntVal(x) => write!(f, "{}", x),
            FloatVal(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RuntimeError {
    DivisionByZero {
        loc: SourceLoc,
    },
    Overflow {
        loc: SourceLoc,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuntimeError::DivisionByZero { loc } => {
                write!(f, "word {}: attempted to divide by zero", loc.word)
            }
            RuntimeError::Overflow { loc } => {
                write!(f, "word {}: integer overflow evaluating expression", loc.word)
            }
        }
    }
}

impl error::Error for RuntimeError {}
