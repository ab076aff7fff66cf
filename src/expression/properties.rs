use quickcheck::{Arbitrary, Gen};

use crate::expression::ast::{ExpressionTree, Operator};
use crate::expression::errors::ExpressionError;

const OPERATORS: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

/// A randomly shaped tree of single-digit operands, independent of the parser
#[derive(Clone, Debug)]
enum Shape {
    Leaf(u8),
    Node(Operator, Box<Shape>, Box<Shape>),
}

fn arbitrary_shape(g: &mut Gen, depth: usize) -> Shape {
    let stop = depth == 0 || bool::arbitrary(g);
    if stop {
        Shape::Leaf(u8::arbitrary(g) % 10)
    } else {
        let operator = *g.choose(&OPERATORS).unwrap_or(&Operator::Add);
        Shape::Node(
            operator,
            Box::new(arbitrary_shape(g, depth - 1)),
            Box::new(arbitrary_shape(g, depth - 1)),
        )
    }
}

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        arbitrary_shape(g, 5)
    }
}

impl Shape {
    fn render(&self) -> String {
        match self {
            Shape::Leaf(n) => n.to_string(),
            Shape::Node(operator, left, right) => {
                format!("({}{}{})", left.render(), operator.symbol(), right.render())
            }
        }
    }

    /// Direct arithmetic over the shape; `None` on division by zero
    fn reference(&self) -> Option<f64> {
        match self {
            Shape::Leaf(n) => Some(f64::from(*n)),
            Shape::Node(operator, left, right) => {
                let left = left.reference()?;
                let right = right.reference()?;
                reference_apply(*operator, left, right)
            }
        }
    }
}

fn reference_apply(operator: Operator, left: f64, right: f64) -> Option<f64> {
    match operator {
        Operator::Add => Some(left + right),
        Operator::Sub => Some(left - right),
        Operator::Mul => Some(left * right),
        Operator::Div if right == 0.0 => None,
        Operator::Div => Some(left / right),
        Operator::Pow => Some(left.powf(right)),
    }
}

fn agrees(expected: Option<f64>, actual: Result<f64, ExpressionError>) -> bool {
    match (expected, actual) {
        (Some(expected), Ok(actual)) => {
            expected == actual
                || (expected.is_nan() && actual.is_nan())
                || (expected - actual).abs() <= 1e-9 * expected.abs().max(1.0)
        }
        (None, Err(ExpressionError::DivisionByZero)) => true,
        _ => false,
    }
}

quickcheck::quickcheck! {
    fn parenthesized_matches_reference(shape: Shape) -> bool {
        let actual = ExpressionTree::build(&shape.render()).and_then(|tree| tree.evaluate());
        agrees(shape.reference(), actual)
    }
}

quickcheck::quickcheck! {
    // Without parentheses every chain splits on its first operator, which is a right fold.
    fn flat_chain_folds_from_the_right(first: u8, rest: Vec<(u8, u8)>) -> bool {
        let first = first % 10;
        let mut source = first.to_string();
        for &(selector, operand) in &rest {
            let operator = OPERATORS[usize::from(selector) % OPERATORS.len()];
            source.push(operator.symbol());
            source.push_str(&(operand % 10).to_string());
        }

        let mut operands = vec![f64::from(first)];
        operands.extend(rest.iter().map(|&(_, operand)| f64::from(operand % 10)));
        let mut expected = operands.last().copied();
        for (i, &(selector, _)) in rest.iter().enumerate().rev() {
            let operator = OPERATORS[usize::from(selector) % OPERATORS.len()];
            expected = expected.and_then(|right| reference_apply(operator, operands[i], right));
        }

        let actual = ExpressionTree::build(&source).and_then(|tree| tree.evaluate());
        agrees(expected, actual)
    }
}

quickcheck::quickcheck! {
    fn display_round_trips(shape: Shape) -> bool {
        match ExpressionTree::build(&shape.render()) {
            Ok(tree) => match ExpressionTree::build(&tree.to_string()) {
                Ok(reparsed) => reparsed.root() == tree.root(),
                Err(_) => false,
            },
            Err(_) => false,
        }
    }
}

quickcheck::quickcheck! {
    fn operators_have_two_children(shape: Shape) -> bool {
        match ExpressionTree::build(&shape.render()) {
            Ok(tree) => {
                let shaped = tree.preorder().iter().all(|node| {
                    node.is_leaf() == (node.left().is_none() && node.right().is_none())
                        && node.left().is_some() == node.right().is_some()
                });
                shaped && tree.node_count() == 2 * tree.leaf_count() - 1
            }
            Err(_) => false,
        }
    }
}
