use super::{Comma, Formatter, Literal, ToSql};

use tabula_core::stmt::Value;

use std::fmt::Write;

/// Literal rendering, used for parameter defaults in generated DDL.
impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Value::Null => fmt!(f, "NULL"),
            Value::Bool(true) => fmt!(f, "1"),
            Value::Bool(false) => fmt!(f, "0"),
            Value::I32(v) => fmt!(f, v.to_string()),
            Value::I64(v) => fmt!(f, v.to_string()),
            Value::F64(v) => fmt!(f, v.to_string()),
            Value::Enum(v) => fmt!(f, v.discriminant.to_string()),
            Value::String(v) => fmt!(
                f,
                Literal {
                    text: v,
                    unicode: true
                }
            ),
            Value::Uuid(v) => {
                let text = v.to_string();
                fmt!(
                    f,
                    Literal {
                        text: &text,
                        unicode: false
                    }
                );
            }
            Value::Bytes(bytes) => {
                f.dst.push_str("0x");
                for byte in bytes {
                    // Writing to a String cannot fail
                    let _ = write!(f.dst, "{byte:02X}");
                }
            }
            Value::List(values) => fmt!(f, Comma(values)),
        }
    }
}
