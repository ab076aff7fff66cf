use log::debug;

use crate::expression::ast::{ExpressionNode, ExpressionTree, Operator};
use crate::expression::errors::ExpressionError;

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

impl Operator {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero, including raising zero to a negative power
    /// - Raising a negative base to a fractional exponent (complex result)
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right == 0.0 {
                    debug!("Division by zero attempted: {} / {}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Pow => {
                if left == 0.0 && right < 0.0 {
                    debug!("Zero raised to negative power: {}^{}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else if left < 0.0 && !is_integer(right) {
                    debug!(
                        "Complex result from negative base with fractional exponent: {}^{}",
                        left, right
                    );
                    Err(ExpressionError::ComplexResult)
                } else {
                    Ok(left.powf(right))
                }
            }
        }
    }
}

impl ExpressionNode {
    /// Evaluate this subtree, left child before right.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`Operator::apply`].
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            ExpressionNode::Operand(n) => Ok(*n),
            ExpressionNode::Operator {
                operator,
                left,
                right,
            } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                operator.apply(left, right)
            }
        }
    }
}

impl ExpressionTree {
    /// # Errors
    ///
    /// Returns an error when attempting division by zero or when a power has no
    /// real result.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = self.root.evaluate();

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}
