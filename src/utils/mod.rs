//! Input handling shared by the command-line front end

mod batch;
mod errors;
mod validation;

pub use batch::batch_lines;
pub use errors::UtilsError;
pub use validation::validate_expression_input;
