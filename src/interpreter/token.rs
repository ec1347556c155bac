//! Line tokenizer and token classification.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::ExprError;

lazy_static! {
    static ref INT_LITERAL: Regex = Regex::new(r"^\d+$").unwrap();
}

/// The two operators the expression language knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Star,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Star => "*",
        }
    }
}

/// A classified lexical unit: a non-negative integer literal or an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Operator(Operator),
}

/// Split a line into raw whitespace-delimited tokens, left to right.
///
/// The sequence is lazy and finite; calling this again on the same line
/// restarts it. No validation happens here; classification is part of
/// tree construction, see [`classify`].
pub fn tokens(line: &str) -> std::str::SplitWhitespace<'_> {
    line.split_whitespace()
}

/// Classify one raw token.
///
/// Integer literals are anything matching `\d+` that fits in an `i64`;
/// a lexically valid literal too large for `i64` is rejected as an
/// invalid element rather than silently truncated.
pub fn classify(raw: &str) -> Result<Token, ExprError> {
    match raw {
        "+" => Ok(Token::Operator(Operator::Plus)),
        "*" => Ok(Token::Operator(Operator::Star)),
        _ if INT_LITERAL.is_match(raw) => raw
            .parse::<i64>()
            .map(Token::Number)
            .map_err(|_| ExprError::invalid_token(raw)),
        _ => Err(ExprError::invalid_token(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let collected: Vec<&str> = tokens("  12\t+ 3 ").collect();
        assert_eq!(collected, vec!["12", "+", "3"]);
    }

    #[test]
    fn tokenizer_is_restartable() {
        let line = "1 + 2";
        assert_eq!(tokens(line).count(), 3);
        assert_eq!(tokens(line).count(), 3);
    }

    #[test]
    fn classifies_numbers_and_operators() {
        assert_eq!(classify("42"), Ok(Token::Number(42)));
        assert_eq!(classify("+"), Ok(Token::Operator(Operator::Plus)));
        assert_eq!(classify("*"), Ok(Token::Operator(Operator::Star)));
    }

    #[test]
    fn operators_round_trip_to_their_symbols() {
        assert_eq!(Operator::Plus.symbol(), "+");
        assert_eq!(Operator::Star.symbol(), "*");
        assert_eq!(classify(Operator::Star.symbol()), Ok(Token::Operator(Operator::Star)));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(classify("x"), Err(ExprError::invalid_token("x")));
        assert_eq!(classify("-3"), Err(ExprError::invalid_token("-3")));
        assert_eq!(classify("3.5"), Err(ExprError::invalid_token("3.5")));
        assert_eq!(classify("("), Err(ExprError::invalid_token("(")));
    }

    #[test]
    fn rejects_literals_that_overflow_i64() {
        let huge = "99999999999999999999";
        assert_eq!(classify(huge), Err(ExprError::invalid_token(huge)));
    }
}
