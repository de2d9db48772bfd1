use super::{Formatter, Ident, Literal, ToSql};

use tabula_core::stmt;

struct Qualifier<'a>(Option<&'a str>);

impl ToSql for Qualifier<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(alias) = self.0 {
            fmt!(f, alias ".");
        }
    }
}

impl ToSql for &stmt::Field {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Field::Column(column) => {
                fmt!(f, Qualifier(column.table.as_deref()) Ident(&column.name));
            }
            stmt::Field::Json(json) => {
                let path = format!("$.{}", json.path);
                let path = Literal {
                    text: &path,
                    unicode: false,
                };
                fmt!(f, "JSON_VALUE(" Qualifier(json.table.as_deref()) Ident(&json.column) ", " path ")");
            }
            stmt::Field::Raw(sql) => fmt!(f, sql),
        }
    }
}
