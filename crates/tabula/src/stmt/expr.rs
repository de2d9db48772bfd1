use super::{Field, IntoExpr};

use std::{marker::PhantomData, ops};
use tabula_core::stmt;

/// An untyped predicate node tagged with the Rust type it evaluates to.
///
/// The tag only constrains how expressions combine at compile time; the
/// translator sees the untyped node.
pub struct Expr<T: ?Sized> {
    node: stmt::Expr,
    _ty: PhantomData<fn() -> T>,
}

impl<T: ?Sized> Expr<T> {
    pub fn from_untyped(node: impl Into<stmt::Expr>) -> Self {
        Self {
            node: node.into(),
            _ty: PhantomData,
        }
    }

    pub(crate) fn constant(value: stmt::Value) -> Self {
        Self::from_untyped(value)
    }

    pub fn as_untyped(&self) -> &stmt::Expr {
        &self.node
    }

    pub fn into_untyped(self) -> stmt::Expr {
        self.node
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::and(self.node, rhs.into_expr().node))
    }

    pub fn or(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::or(self.node, rhs.into_expr().node))
    }

    /// Conjunction of every predicate, `None` when there are none.
    pub fn all<E: IntoExpr<bool>>(predicates: impl IntoIterator<Item = E>) -> Option<Self> {
        let mut predicates = predicates.into_iter().map(IntoExpr::<bool>::into_expr);
        let first = predicates.next()?;
        Some(predicates.fold(first, |acc, next| acc.and(next)))
    }
}

impl ops::Not for Expr<bool> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_untyped(stmt::Expr::not(self.node))
    }
}

impl<D> ops::Not for Field<D, bool> {
    type Output = Expr<bool>;

    fn not(self) -> Expr<bool> {
        !self.into_expr()
    }
}

impl<T: ?Sized> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self::from_untyped(self.node.clone())
    }
}

impl<T: ?Sized> std::fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.node, f)
    }
}
