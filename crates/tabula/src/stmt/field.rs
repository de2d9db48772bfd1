use super::{Expr, IntoExpr, Primitive};

use std::{fmt, marker::PhantomData};
use tabula_core::stmt::{self, PatternKind};

/// A mapped property `V` of document type `D`.
///
/// Fields are declared as associated constants of the document:
///
/// ```ignore
/// impl Foo {
///     pub const INT: Field<Foo, i32> = Field::new("Int");
/// }
/// ```
pub struct Field<D, V> {
    name: &'static str,
    _p: PhantomData<fn() -> (D, V)>,
}

impl<D, V> Field<D, V> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _p: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    fn untyped(&self) -> stmt::Expr {
        stmt::Expr::field(self.name)
    }

    fn compare(self, op: stmt::BinaryOp, rhs: impl IntoExpr<V>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::binary_op(
            self.untyped(),
            op,
            rhs.into_expr().into_untyped(),
        ))
    }

    pub fn eq(self, rhs: impl IntoExpr<V>) -> Expr<bool> {
        self.compare(stmt::BinaryOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl IntoExpr<V>) -> Expr<bool> {
        self.compare(stmt::BinaryOp::Ne, rhs)
    }

    pub fn gt(self, rhs: impl IntoExpr<V>) -> Expr<bool> {
        self.compare(stmt::BinaryOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl IntoExpr<V>) -> Expr<bool> {
        self.compare(stmt::BinaryOp::Ge, rhs)
    }

    pub fn lt(self, rhs: impl IntoExpr<V>) -> Expr<bool> {
        self.compare(stmt::BinaryOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl IntoExpr<V>) -> Expr<bool> {
        self.compare(stmt::BinaryOp::Le, rhs)
    }

    pub fn in_list(self, values: impl IntoIterator<Item = V>) -> Expr<bool>
    where
        V: Primitive,
    {
        Expr::from_untyped(stmt::Expr::in_list(
            self.untyped(),
            values.into_iter().map(Primitive::into_value),
        ))
    }

    pub fn not_in(self, values: impl IntoIterator<Item = V>) -> Expr<bool>
    where
        V: Primitive,
    {
        Expr::from_untyped(stmt::Expr::not_in_list(
            self.untyped(),
            values.into_iter().map(Primitive::into_value),
        ))
    }

    pub fn is_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_null(self.untyped()))
    }

    pub fn is_not_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_not_null(self.untyped()))
    }

    /// Applies a named method to the field. Method calls have no SQL
    /// translation; filtering on one is an error.
    pub fn call(self, method: &str, args: impl IntoIterator<Item = stmt::Value>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::call(
            self.untyped(),
            method,
            args.into_iter().map(stmt::Expr::Value).collect(),
        ))
    }
}

impl<D> Field<D, String> {
    pub fn contains(self, pattern: &str) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::pattern(
            PatternKind::Contains,
            self.untyped(),
            pattern,
        ))
    }

    pub fn starts_with(self, pattern: &str) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::pattern(
            PatternKind::StartsWith,
            self.untyped(),
            pattern,
        ))
    }

    pub fn ends_with(self, pattern: &str) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::pattern(
            PatternKind::EndsWith,
            self.untyped(),
            pattern,
        ))
    }
}

impl<D, V> IntoExpr<V> for Field<D, V> {
    fn into_expr(self) -> Expr<V> {
        Expr::from_untyped(self.untyped())
    }
}

impl<D, V> Clone for Field<D, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, V> Copy for Field<D, V> {}

impl<D, V> fmt::Debug for Field<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}
