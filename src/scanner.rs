use std::mem;

use fnv::FnvHashMap;
use log::warn;

use crate::ast::BinaryOperator;
use crate::token::*;

lazy_static! {
    static ref OPERATORS: FnvHashMap<&'static str, BinaryOperator> = {
        let mut m = FnvHashMap::default();
        use crate::ast::BinaryOperator::*;
        m.insert("+", Plus);
        m.insert("-", Minus);
        m.insert("*", Multiply);
        m.insert("/", Divide);

        m
    };
}

// The lexical model is whitespace-separated words.  Each word becomes at
// most one token; a word that is neither numeric nor an operator symbol is
// dropped from the stream entirely.
pub struct Scanner<'source> {
    source: &'source str,
    tokens: Vec<Token<'source>>,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Scanner<'source> {
        Scanner {
            source,
            tokens: Vec::new(),
        }
    }

    pub fn scan_tokens(&mut self) -> Vec<Token<'source>> {
        let source = self.source;
        for (index, word) in source.split_whitespace().enumerate() {
            // Word positions are 1-based and count dropped words too.
            self.scan_word(word, index as u32 + 1);
        }

        mem::replace(&mut self.tokens, Vec::new())
    }

    fn scan_word(&mut self, word: &'source str, position: u32) {
        // Integer syntax always classifies as Integer, never Float.
        if let Ok(value) = word.parse::<i64>() {
            self.add_token(TokenKind::Integer(value), word, position);
        }
        else if let Ok(value) = word.parse::<f64>() {
            self.add_token(TokenKind::Float(value), word, position);
        }
        else if let Some(op) = OPERATORS.get(word) {
            self.add_token(TokenKind::Operator(*op), word, position);
        }
        else {
            warn!("no operator match: {:?}", word);
        }
    }

    fn add_token(&mut self, kind: TokenKind, lexeme: &'source str, position: u32) {
        self.tokens.push(Token::new(kind, lexeme, position));
    }
}
