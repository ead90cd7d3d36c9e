//! Evaluator for arithmetic expressions written as whitespace-separated
//! tokens, e.g. `"2 * 3 + 1"`.  See [`evaluate`].

#[macro_use]
extern crate lazy_static;

pub mod ast;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod source_loc;
pub mod token;
pub mod value;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt;

pub use crate::error::ParseError;
pub use crate::value::{RuntimeError, Value};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalError {
    Parse(ParseError),
    Runtime(RuntimeError),
}

// The single operation exposed to callers: tokenize, build the tree, walk
// it.  Each call is independent; nothing is shared between calls.
pub fn evaluate(source: &str) -> Result<Value, EvalError> {
    let expr = parser::parse(source)?;
    let value = interpreter::interpret(&expr)?;

    Ok(value)
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::Parse(err) => write!(f, "{}", err),
            EvalError::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EvalError::Parse(err) => Some(err),
            EvalError::Runtime(err) => Some(err),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> EvalError {
        EvalError::Parse(err)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(err: RuntimeError) -> EvalError {
        EvalError::Runtime(err)
    }
}
