use log::{debug, warn};
use std::str::FromStr;

use crate::expression::ast::{ExpressionNode, ExpressionTree, Operator};
use crate::expression::constants::{MAX_NESTING_DEPTH, OPERATORS};
use crate::expression::errors::ExpressionError;

/// # Errors
///
/// Returns `UnbalancedParentheses` when the counts of `(` and `)` differ, or when a
/// closing parenthesis appears before its opening partner.
pub fn check_parentheses(expression: &str) -> Result<(), ExpressionError> {
    let open = expression.matches('(').count();
    let close = expression.matches(')').count();

    if open != close {
        warn!(
            "Unbalanced parentheses in '{}': {} opening, {} closing",
            expression, open, close
        );
        return Err(ExpressionError::UnbalancedParentheses { open, close });
    }

    let mut depth = 0usize;
    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    warn!("Closing parenthesis before its opening one in '{}'", expression);
                    return Err(ExpressionError::UnbalancedParentheses { open, close });
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    Ok(())
}

#[inline]
fn is_operand(expression: &str) -> bool {
    !expression.chars().any(|c| OPERATORS.contains(&c))
}

fn parse_operand(expression: &str) -> Result<ExpressionNode, ExpressionError> {
    let literal = expression.trim();
    if literal.is_empty() {
        debug!("Missing operand");
        return Err(ExpressionError::MalformedExpression(
            "missing operand".to_string(),
        ));
    }

    let value = literal
        .parse::<f64>()
        .map_err(|_| ExpressionError::InvalidOperand(literal.to_string()))?;
    debug!("Parsed operand '{}' as {}", literal, value);
    Ok(ExpressionNode::operand(value))
}

/// Remove one pair of parentheses wrapping the whole expression.
///
/// `(1+2)*(3+4)` starts and ends with parentheses but is left alone, since the
/// first `(` closes before the end.
fn strip_enclosing(expression: &str) -> &str {
    let trimmed = expression.trim();
    if !(trimmed.starts_with('(') && trimmed.ends_with(')')) {
        return trimmed;
    }

    let mut depth = 0usize;
    for (i, c) in trimmed.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if i + 1 == trimmed.len() {
                        return trimmed.get(1..i).unwrap_or(trimmed);
                    }
                    return trimmed;
                }
            }
            _ => {}
        }
    }

    trimmed
}

/// Find the leftmost operator outside any parentheses
fn find_split(expression: &str) -> Option<(usize, Operator)> {
    let mut depth = 0i64;
    for (i, c) in expression.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ if depth == 0 => {
                if let Some(operator) = Operator::from_symbol(c) {
                    return Some((i, operator));
                }
            }
            _ => {}
        }
    }
    None
}

fn build_node(expression: &str, level: usize) -> Result<ExpressionNode, ExpressionError> {
    if level > MAX_NESTING_DEPTH {
        warn!("Expression exceeds {} nesting levels", MAX_NESTING_DEPTH);
        return Err(ExpressionError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }

    if is_operand(expression) {
        return parse_operand(expression);
    }

    let inner = strip_enclosing(expression);
    let (index, operator) = find_split(inner).ok_or_else(|| {
        debug!("No operator outside parentheses in '{}'", inner);
        ExpressionError::MalformedExpression(format!(
            "no operator outside parentheses in '{}'",
            inner
        ))
    })?;

    // Operators are single ASCII bytes, so both slices land on char boundaries.
    let left_text = inner.get(..index).unwrap_or_default();
    let right_text = inner.get(index + 1..).unwrap_or_default();
    debug!(
        "Splitting '{}' at '{}' into '{}' and '{}'",
        inner,
        operator.symbol(),
        left_text,
        right_text
    );

    let left = build_node(left_text, level + 1)?;
    let right = build_node(right_text, level + 1)?;
    Ok(ExpressionNode::operator(operator, left, right))
}

impl ExpressionTree {
    /// Build a tree from a fully parenthesized infix expression.
    ///
    /// Each subexpression splits on its leftmost operator outside parentheses, so
    /// `2+3*4` means `2+(3*4)` and `2*3+4` means `2*(3+4)`.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - the parentheses are unbalanced
    /// - an operand is not a number
    /// - an operand or operator is missing, or the input is empty
    /// - the expression nests deeper than [`MAX_NESTING_DEPTH`]
    pub fn build(source: &str) -> Result<Self, ExpressionError> {
        debug!("Building expression tree from '{}'", source);

        if source.trim().is_empty() {
            warn!("Empty expression");
            return Err(ExpressionError::MalformedExpression(
                "empty expression".to_string(),
            ));
        }

        check_parentheses(source)?;
        let root = build_node(source, 0)?;

        debug!("Built expression tree: {}", root);
        Ok(Self {
            root,
            source: source.to_string(),
        })
    }
}

impl FromStr for ExpressionTree {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::build(s)
    }
}
