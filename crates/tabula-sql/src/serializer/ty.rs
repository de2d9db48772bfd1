use super::{Formatter, ToSql};

use tabula_core::stmt::{Length, SqlType};

impl ToSql for &SqlType {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            SqlType::Bit => fmt!(f, "BIT"),
            SqlType::TinyInt => fmt!(f, "TINYINT"),
            SqlType::SmallInt => fmt!(f, "SMALLINT"),
            SqlType::Int => fmt!(f, "INT"),
            SqlType::BigInt => fmt!(f, "BIGINT"),
            SqlType::Float => fmt!(f, "FLOAT"),
            SqlType::Decimal(precision, scale) => {
                fmt!(f, format!("DECIMAL({precision}, {scale})"));
            }
            SqlType::NVarChar(len) => fmt!(f, "NVARCHAR(" len ")"),
            SqlType::VarChar(len) => fmt!(f, "VARCHAR(" len ")"),
            SqlType::VarBinary(len) => fmt!(f, "VARBINARY(" len ")"),
            SqlType::UniqueIdentifier => fmt!(f, "UNIQUEIDENTIFIER"),
            SqlType::DateTime2 => fmt!(f, "DATETIME2"),
            SqlType::RowVersion => fmt!(f, "ROWVERSION"),
        }
    }
}

impl ToSql for &Length {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Length::Fixed(n) => fmt!(f, n.to_string()),
            Length::Max => fmt!(f, "MAX"),
        }
    }
}
