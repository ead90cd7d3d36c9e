use crate::ast::*;
use crate::ast::Expr::*;
use crate::error::*;
use crate::parser::*;
use crate::source_loc::*;

#[test]
fn test_parse_literal() {
    assert_eq!(parse("42"), Ok(LiteralInt(42)));
    assert_eq!(parse("-7"), Ok(LiteralInt(-7)));
    assert_eq!(parse("42.5"), Ok(LiteralFloat(42.5)));
}

#[test]
fn test_parse_binary_op() {
    assert_eq!(parse("40 + 2"), Ok(Binary(Box::new(LiteralInt(40)),
                                          BinaryOperator::Plus,
                                          Box::new(LiteralInt(2)),
                                          SourceLoc::new(2))));
}

#[test]
fn test_parse_lowest_priority_operator_becomes_root() {
    // "+" outranks "*" for the split, so the multiplication nests below it.
    assert_eq!(parse("2 * 3 + 1"),
               Ok(Binary(Box::new(Binary(Box::new(LiteralInt(2)),
                                         BinaryOperator::Multiply,
                                         Box::new(LiteralInt(3)),
                                         SourceLoc::new(2))),
                         BinaryOperator::Plus,
                         Box::new(LiteralInt(1)),
                         SourceLoc::new(4))));
}

#[test]
fn test_parse_equal_priority_splits_at_rightmost() {
    // The second "+" becomes the root, so the chain associates to the left.
    assert_eq!(parse("1 + 2 + 3"),
               Ok(Binary(Box::new(Binary(Box::new(LiteralInt(1)),
                                         BinaryOperator::Plus,
                                         Box::new(LiteralInt(2)),
                                         SourceLoc::new(2))),
                         BinaryOperator::Plus,
                         Box::new(LiteralInt(3)),
                         SourceLoc::new(4))));
}

#[test]
fn test_parse_plus_splits_before_minus() {
    // "+" has priority 10 and "-" has 20, so "+" is always the root even
    // when it appears first.
    assert_eq!(parse("1 + 2 - 3"),
               Ok(Binary(Box::new(LiteralInt(1)),
                         BinaryOperator::Plus,
                         Box::new(Binary(Box::new(LiteralInt(2)),
                                         BinaryOperator::Minus,
                                         Box::new(LiteralInt(3)),
                                         SourceLoc::new(4))),
                         SourceLoc::new(2))));
}

#[test]
fn test_parse_divide_splits_before_multiply() {
    assert_eq!(parse("8 / 2 * 4"),
               Ok(Binary(Box::new(LiteralInt(8)),
                         BinaryOperator::Divide,
                         Box::new(Binary(Box::new(LiteralInt(2)),
                                         BinaryOperator::Multiply,
                                         Box::new(LiteralInt(4)),
                                         SourceLoc::new(4))),
                         SourceLoc::new(2))));
}

#[test]
fn test_parse_no_operator() {
    assert_eq!(parse("1 2"),
               Err(ParseError::NoOperatorFound { loc: SourceLoc::new(1) }));
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse(""), Err(ParseError::EmptyInput));
    assert_eq!(parse("   "), Err(ParseError::EmptyInput));
    // A single unrecognized word scans to zero tokens.
    assert_eq!(parse("bogus"), Err(ParseError::EmptyInput));
}

#[test]
fn test_parse_missing_operand() {
    assert_eq!(parse("1 +"),
               Err(ParseError::MissingOperand { loc: SourceLoc::new(2) }));
    assert_eq!(parse("* 2"),
               Err(ParseError::MissingOperand { loc: SourceLoc::new(1) }));
    assert_eq!(parse("/"),
               Err(ParseError::MissingOperand { loc: SourceLoc::new(1) }));
}

#[test]
fn test_parse_skips_unrecognized_words() {
    // The lenient scanner leaves a malformed token list behind.
    assert_eq!(parse("1 plus 2"),
               Err(ParseError::NoOperatorFound { loc: SourceLoc::new(1) }));
}
