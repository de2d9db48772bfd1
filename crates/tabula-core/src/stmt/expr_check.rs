use super::{Expr, Value};

/// `expr IS NULL`, or `IS NOT NULL` when `negate` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub expr: Box<Expr>,
    pub negate: bool,
}

/// Membership of `expr` in a fixed list of values. An empty list is legal
/// and matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Value>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Self>) -> Self {
        Self::IsNull(ExprIsNull {
            expr: Box::new(expr.into()),
            negate: false,
        })
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        Self::IsNull(ExprIsNull {
            expr: Box::new(expr.into()),
            negate: true,
        })
    }

    pub fn in_list(expr: impl Into<Self>, values: impl IntoIterator<Item = Value>) -> Self {
        Self::InList(ExprInList {
            expr: Box::new(expr.into()),
            list: values.into_iter().collect(),
        })
    }

    /// Negated membership is expressed as `NOT (expr IN list)`; the
    /// translator folds the pair into a single `NOT IN`.
    pub fn not_in_list(expr: impl Into<Self>, values: impl IntoIterator<Item = Value>) -> Self {
        Self::not(Self::in_list(expr, values))
    }
}
