use super::*;

/// Untyped predicate tree built by typed field handles and walked by the
/// translator. Only a subset of shapes translates to SQL; see
/// `tabula::translate`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// Method call that has no SQL counterpart
    Call(ExprCall),

    /// References a mapped property of the queried document
    Field(ExprField),

    /// In list
    InList(ExprInList),

    /// Whether an expression is (or is not) null
    IsNull(ExprIsNull),

    /// Negation
    Not(ExprNot),

    /// OR a set of expressions
    Or(ExprOr),

    /// String pattern match
    Pattern(ExprPattern),

    /// Constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(..))
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Short description of the node, used in translation errors.
    pub fn describe(&self) -> String {
        match self {
            Self::And(_) => "AND".into(),
            Self::BinaryOp(e) => format!("`{}` comparison", e.op),
            Self::Call(e) => format!("call to `{}`", e.name),
            Self::Field(e) => format!("field `{}`", e.name),
            Self::InList(_) => "IN list".into(),
            Self::IsNull(_) => "null check".into(),
            Self::Not(_) => "negation".into(),
            Self::Or(_) => "OR".into(),
            Self::Pattern(e) => format!("{} pattern", e.kind.name()),
            Self::Value(v) => format!("constant {}", v.kind_name()),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_value!(bool, i32, i64, f64, String, &str);
