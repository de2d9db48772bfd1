use super::Expr;

/// A method applied to an expression, e.g. `substring` or `to_upper`.
///
/// Calls exist so that user code can describe them; none of them translate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub name: String,
    pub receiver: Box<Expr>,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn call(receiver: impl Into<Self>, name: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprCall {
            name: name.into(),
            receiver: Box::new(receiver.into()),
            args,
        }
        .into()
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
