use thiserror::Error;

/// Errors that can occur while reading expression input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expression input cannot be empty")]
    EmptyInput,
    #[error("Expected a single line of input, got {lines} lines")]
    MultiLineInput { lines: usize },
}
