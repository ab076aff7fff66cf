use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Reduce raw input to the single expression line it must contain.
///
/// # Errors
///
/// Returns an error if the input is blank or spans more than one line.
pub fn validate_expression_input(input: &str) -> Result<&str, UtilsError> {
    debug!("Validating expression input: '{}'", input.escape_debug());

    let line = input.trim_end_matches(['\r', '\n']);

    if line.contains('\n') {
        let lines = line.lines().count();
        warn!("Expression input spans {} lines", lines);
        return Err(UtilsError::MultiLineInput { lines });
    }

    let line = line.trim();
    if line.is_empty() {
        warn!("Expression input is empty");
        return Err(UtilsError::EmptyInput);
    }

    debug!("Expression input validation successful");
    Ok(line)
}
