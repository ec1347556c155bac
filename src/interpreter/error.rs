//! Expression error types.

use thiserror::Error;

/// Everything that can go wrong with one input line.
///
/// Both kinds are recovered at the line boundary: the CLI prints them in
/// `Error-<message>` form and moves on to the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A token is neither a non-negative integer literal nor `+`/`*`.
    #[error("Invalid element in expression: {token}")]
    InvalidToken { token: String },

    /// The stack reduction could not produce exactly one expression node.
    #[error("Malformed expression: {0}")]
    Malformed(MalformedKind),
}

/// The specific way a reduction went wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    #[error("empty expression")]
    Empty,

    /// An operator marker turned up where the reduction needed an operand.
    #[error("operator found where an operand was expected")]
    OperatorAsOperand,

    /// An operand turned up in the marker slot between two operands.
    #[error("operand found where an operator was expected")]
    OperandAsOperator,

    /// The reduction needed three entries but the stack ran out.
    #[error("missing operand")]
    MissingOperand,

    /// The whole line reduced to a lone operator marker. Markers have no
    /// evaluable semantics, so this is a contract violation distinct from
    /// the shape errors above.
    #[error("bare operator cannot be evaluated")]
    BareOperator,
}

impl ExprError {
    pub fn invalid_token(token: impl Into<String>) -> Self {
        ExprError::InvalidToken {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_message_matches_the_source() {
        let err = ExprError::invalid_token("x");
        assert_eq!(err.to_string(), "Invalid element in expression: x");
    }

    #[test]
    fn malformed_messages_name_the_violated_contract() {
        let err = ExprError::Malformed(MalformedKind::BareOperator);
        assert_eq!(
            err.to_string(),
            "Malformed expression: bare operator cannot be evaluated"
        );
    }
}
