use super::Value;

/// Storage type of a column or a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Bit,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Decimal(u8, u8),
    NVarChar(Length),
    VarChar(Length),
    VarBinary(Length),
    UniqueIdentifier,
    DateTime2,
    RowVersion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Fixed(u32),
    Max,
}

impl SqlType {
    /// Best-effort type for a parameter value, used when a declaration has no
    /// explicit type.
    pub fn for_value(value: &Value) -> SqlType {
        match value {
            Value::Bool(_) => SqlType::Bit,
            Value::Bytes(_) => SqlType::VarBinary(Length::Max),
            Value::Enum(_) | Value::I32(_) => SqlType::Int,
            Value::F64(_) => SqlType::Float,
            Value::I64(_) => SqlType::BigInt,
            Value::Uuid(_) => SqlType::UniqueIdentifier,
            Value::String(_) | Value::Null | Value::List(_) => SqlType::NVarChar(Length::Max),
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, SqlType::NVarChar(_) | SqlType::VarChar(_))
    }
}
