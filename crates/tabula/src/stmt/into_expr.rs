use super::{Expr, Primitive};

use tabula_core::stmt::Value;

/// Anything usable where an expression of type `T` is expected: another
/// expression, a field handle or a plain value.
pub trait IntoExpr<T: ?Sized> {
    fn into_expr(self) -> Expr<T>;
}

impl<T: ?Sized> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Self {
        self
    }
}

impl<T: Primitive> IntoExpr<T> for T {
    fn into_expr(self) -> Expr<T> {
        Expr::constant(self.into_value())
    }
}

// A bare value also compares against a nullable field
impl<T: Primitive> IntoExpr<Option<T>> for T {
    fn into_expr(self) -> Expr<Option<T>> {
        Expr::constant(self.into_value())
    }
}

macro_rules! borrowed_strings {
    ($($src:ty => $target:ty),*) => {
        $(
            impl IntoExpr<$target> for $src {
                fn into_expr(self) -> Expr<$target> {
                    Expr::constant(Value::from(self))
                }
            }
        )*
    };
}

borrowed_strings!(&str => String, &str => Option<String>, &String => String);
