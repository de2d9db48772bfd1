use super::{Expr, Operand};

use std::fmt;

/// `lhs op rhs`. Only a field compared with a constant, on either side,
/// lowers to SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
}

impl BinaryOp {
    /// Same comparison with its operands swapped: `1 < x` holds exactly
    /// when `x > 1` does.
    pub fn commute(self) -> Self {
        use BinaryOp::*;

        match self {
            Ge => Le,
            Gt => Lt,
            Le => Ge,
            Lt => Gt,
            symmetric => symmetric,
        }
    }

    /// The where-clause operand rendering this comparison.
    pub fn operand(self) -> Operand {
        use BinaryOp::*;

        match self {
            Eq => Operand::Equal,
            Ne => Operand::NotEqual,
            Ge => Operand::GreaterThanOrEqual,
            Gt => Operand::GreaterThan,
            Le => Operand::LessThanOrEqual,
            Lt => Operand::LessThan,
        }
    }

    fn symbol(self) -> &'static str {
        use BinaryOp::*;

        match self {
            Eq => "==",
            Ne => "!=",
            Ge => ">=",
            Gt => ">",
            Le => "<=",
            Lt => "<",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

macro_rules! comparisons {
    ($($name:ident => $op:ident,)*) => {
        impl Expr {
            pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
                Self::BinaryOp(ExprBinaryOp {
                    lhs: Box::new(lhs.into()),
                    op,
                    rhs: Box::new(rhs.into()),
                })
            }

            $(
                pub fn $name(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
                    Self::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

comparisons! {
    eq => Eq,
    ne => Ne,
    ge => Ge,
    gt => Gt,
    le => Le,
    lt => Lt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commute_mirrors_ordering() {
        assert_eq!(BinaryOp::Lt.commute(), BinaryOp::Gt);
        assert_eq!(BinaryOp::Ge.commute(), BinaryOp::Le);
        assert_eq!(BinaryOp::Ne.commute(), BinaryOp::Ne);
    }
}
