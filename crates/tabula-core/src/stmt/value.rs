use super::ValueEnum;
use crate::{Error, Result};

use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Binary value
    Bytes(Vec<u8>),

    /// Value of an enumerated type. The type-handling layer of the connection
    /// decides how it is represented on the wire.
    Enum(ValueEnum),

    /// 64-bit float
    F64(f64),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values, only used as an operand of `IN`
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Globally unique identifier
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Bytes(_) => "Bytes",
            Self::Enum(_) => "Enum",
            Self::F64(_) => "F64",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::Uuid(_) => "Uuid",
        }
    }

    /// Length used for max-length validation: characters for strings, bytes
    /// for binary values.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::String(v) => Some(v.chars().count()),
            Self::Bytes(v) => Some(v.len()),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn conversion_error(&self, ty: &str) -> Error {
        Error::invalid_result(format!("cannot convert {} to {ty}", self.kind_name()))
    }
}

macro_rules! impl_from_int {
    ( $( $t:ty => $variant:ident ),* ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::$variant(src.into())
                }
            }
        )*
    };
}

impl_from_int!(i8 => I32, i16 => I32, i32 => I32, u8 => I32, u16 => I32, i64 => I64, u32 => I64);

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F64(src.into())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<ValueEnum> for Value {
    fn from(src: ValueEnum) -> Self {
        Self::Enum(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            _ => Err(value.conversion_error("bool")),
        }
    }
}

macro_rules! impl_try_from_value_int {
    ( $( $t:ty ),* ) => {
        $(
            impl TryFrom<Value> for $t {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I32(v) => <$t>::try_from(*v).ok(),
                        Value::I64(v) => <$t>::try_from(*v).ok(),
                        Value::Enum(v) => <$t>::try_from(v.discriminant).ok(),
                        _ => None,
                    };
                    converted.ok_or_else(|| value.conversion_error(stringify!($t)))
                }
            }
        )*
    };
}

impl_try_from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v.into()),
            // Precision loss past 2^53 is accepted for floating point targets.
            Value::I64(v) => Ok(v as f64),
            _ => Err(value.conversion_error("f64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Enum(v) => Ok(v.name),
            _ => Err(value.conversion_error("String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(value.conversion_error("Vec<u8>")),
        }
    }
}

impl TryFrom<Value> for Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Uuid::parse_str(&v)
                .map_err(|e| Error::invalid_result(format!("cannot convert String to Uuid: {e}"))),
            _ => Err(value.conversion_error("Uuid")),
        }
    }
}
