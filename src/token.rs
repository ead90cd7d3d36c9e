use crate::ast::BinaryOperator;
use crate::source_loc::SourceLoc;

// What a word classified as.  Numeric words keep their parsed value;
// operator words keep their operator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind {
    Integer(i64),
    Float(f64),
    Operator(BinaryOperator),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub loc: SourceLoc,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind,
               lexeme: &'a str,
               word: u32)
        -> Token<'a>
    {
        Token {
            kind,
            lexeme,
            loc: SourceLoc::new(word),
        }
    }
}
