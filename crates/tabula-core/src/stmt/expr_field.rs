use super::Expr;

/// References a property of the queried document by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprField {
    pub name: String,
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        ExprField { name: name.into() }.into()
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
