// Configuration constants for the expression parser
pub const OPERATORS: [char; 5] = ['+', '-', '*', '/', '^'];
pub const MAX_NESTING_DEPTH: usize = 512;
