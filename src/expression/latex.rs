use crate::expression::ast::{ExpressionNode, ExpressionTree, Operator};

impl ExpressionNode {
    /// Render the subtree as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division
    /// - Parenthesizes only where the tree shape differs from conventional precedence
    pub fn to_latex(&self) -> String {
        fn precedence(node: &ExpressionNode) -> u8 {
            match node {
                ExpressionNode::Operator { operator, .. } => match operator {
                    Operator::Add | Operator::Sub => 1,
                    Operator::Mul | Operator::Div => 2,
                    Operator::Pow => 4,
                },
                ExpressionNode::Operand(_) => 5,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(node: &ExpressionNode) -> String {
            match node {
                ExpressionNode::Operand(n) => number_to_string(*n),
                ExpressionNode::Operator {
                    operator,
                    left,
                    right,
                } => {
                    let lp = precedence(left);
                    let rp = precedence(right);
                    let mut ls = fmt(left);
                    let mut rs = fmt(right);

                    match operator {
                        Operator::Add => format!("{} + {}", ls, rs),
                        Operator::Sub => {
                            if rp <= 1 {
                                rs = wrap_parens(rs);
                            }
                            format!("{} - {}", ls, rs)
                        }
                        Operator::Mul => {
                            if lp < 2 {
                                ls = wrap_parens(ls);
                            }
                            if rp < 2 {
                                rs = wrap_parens(rs);
                            }
                            format!("{} \\cdot {}", ls, rs)
                        }
                        Operator::Div => format!("\\frac{{{}}}{{{}}}", ls, rs),
                        Operator::Pow => {
                            // Any compound base needs grouping
                            if lp < 5 {
                                ls = wrap_parens(ls);
                            }
                            format!("{}^{{{}}}", ls, rs)
                        }
                    }
                }
            }
        }

        fn number_to_string(n: f64) -> String {
            // Preserve integers without trailing .0, keep others as-is
            if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e18 {
                format!("{}", n.trunc() as i64)
            } else if n.is_infinite() {
                if n.is_sign_positive() {
                    String::from("\\infty")
                } else {
                    String::from("-\\infty")
                }
            } else if n.is_nan() {
                String::from("\\mathrm{NaN}")
            } else {
                format!("{}", n)
            }
        }

        fmt(self)
    }
}

impl ExpressionTree {
    pub fn to_latex(&self) -> String {
        self.root.to_latex()
    }
}
