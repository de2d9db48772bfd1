use super::{SqlType, Value};

/// A declared parameter of a generated function or procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name including the leading `@`
    pub name: String,
    pub ty: Option<SqlType>,
    pub default: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: SqlType) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}
