use fnv::FnvHashMap;

use crate::ast::*;
use crate::error::*;
use crate::scanner::Scanner;
use crate::source_loc::SourceLoc;
use crate::token::*;

// Lower priority value = weaker binding = chosen first as the split point.
// Minus and Divide deliberately rank above their additive/multiplicative
// partners; see DESIGN.md.
lazy_static! {
    static ref PRIORITIES: FnvHashMap<BinaryOperator, u32> = {
        let mut m = FnvHashMap::default();
        use crate::ast::BinaryOperator::*;
        m.insert(Plus, 10);
        m.insert(Minus, 20);
        m.insert(Divide, 30);
        m.insert(Multiply, 40);

        m
    };
}

pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = Scanner::new(source).scan_tokens();
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    build_expr(&tokens)
}

// Make the lowest-priority operator the root of the current subtree and
// recurse on the token slices to either side of it.
fn build_expr(tokens: &[Token]) -> Result<Expr, ParseError> {
    if let [token] = tokens {
        match token.kind {
            TokenKind::Integer(value) => return Ok(Expr::LiteralInt(value)),
            TokenKind::Float(value) => return Ok(Expr::LiteralFloat(value)),
            // A lone operator falls through to the split below and is
            // reported as a missing operand.
            TokenKind::Operator(_) => (),
        }
    }

    let index = match lowest_priority_index(tokens) {
        Some(index) => index,
        None => return Err(ParseError::NoOperatorFound {
            loc: SourceLoc::from(&tokens[0]),
        }),
    };
    let op = match tokens[index].kind {
        TokenKind::Operator(op) => op,
        _ => unreachable!(),
    };
    let loc = SourceLoc::from(&tokens[index]);

    let left_tokens = &tokens[..index];
    let right_tokens = &tokens[index + 1..];
    if left_tokens.is_empty() || right_tokens.is_empty() {
        return Err(ParseError::MissingOperand { loc });
    }
    let left = build_expr(left_tokens)?;
    let right = build_expr(right_tokens)?;

    Ok(Expr::Binary(Box::new(left), op, Box::new(right), loc))
}

// On equal priorities the rightmost operator wins the split, so chains of
// the same operator associate to the left.
fn lowest_priority_index(tokens: &[Token]) -> Option<usize> {
    let mut lowest: Option<(usize, u32)> = None;
    for (index, token) in tokens.iter().enumerate() {
        if let TokenKind::Operator(op) = token.kind {
            let priority = PRIORITIES[&op];
            match lowest {
                Some((_, best)) if best < priority => (),
                _ => lowest = Some((index, priority)),
            }
        }
    }

    lowest.map(|(index, _)| index)
}
