use thiserror::Error;

/// Errors that can occur while building or evaluating an expression tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unbalanced parentheses: {open} opening, {close} closing")]
    UnbalancedParentheses { open: usize, close: usize },
    #[error("Invalid operand: '{0}'")]
    InvalidOperand(String),
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
    #[error("Expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
