use super::Expr;

/// Every operand must hold. Nested conjunctions are spliced into one list
/// when built through [`Expr::and`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

/// At least one operand must hold. Kept in the tree so the translator can
/// name it when rejecting the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

/// Logical negation of a single predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Self::And(nested) => operands.extend(nested.operands),
                other => operands.push(other),
            }
        }

        Self::And(ExprAnd { operands })
    }

    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Self::Or(nested) => operands.extend(nested.operands),
                other => operands.push(other),
            }
        }

        Self::Or(ExprOr { operands })
    }

    /// Double negation cancels out instead of nesting.
    pub fn not(expr: impl Into<Self>) -> Self {
        match expr.into() {
            Self::Not(inner) => *inner.expr,
            expr => Self::Not(ExprNot {
                expr: Box::new(expr),
            }),
        }
    }
}
