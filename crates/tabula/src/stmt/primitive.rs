use crate::Result;

use tabula_core::stmt::{Length, SqlType, Value};
use uuid::Uuid;

/// A type stored in a single column.
pub trait Primitive: Sized + Send + 'static {
    const SQL_TYPE: SqlType;
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $t:ty => $ty:expr ;)* ) => {
        $(
            impl Primitive for $t {
                const SQL_TYPE: SqlType = $ty;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => SqlType::Bit;
    u8 => SqlType::TinyInt;
    i16 => SqlType::SmallInt;
    i32 => SqlType::Int;
    i64 => SqlType::BigInt;
    f64 => SqlType::Float;
    String => SqlType::NVarChar(Length::Max);
    Vec<u8> => SqlType::VarBinary(Length::Max);
    Uuid => SqlType::UniqueIdentifier;
}

impl<T: Primitive> Primitive for Option<T> {
    const SQL_TYPE: SqlType = T::SQL_TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}
