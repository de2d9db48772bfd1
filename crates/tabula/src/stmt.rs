//! Typed predicate construction.
//!
//! A [`Field`] names a mapped property of a document type. Comparing it
//! produces an [`Expr<bool>`] that the translator turns into a `WHERE`
//! clause.

mod expr;
pub use expr::Expr;

mod field;
pub use field::Field;

mod into_expr;
pub use into_expr::IntoExpr;

mod primitive;
pub use primitive::Primitive;

pub use tabula_core::stmt::{
    Aggregate, JoinOn, Length, Operand, QueryOption, SqlType, Value, ValueEnum, Where,
};
