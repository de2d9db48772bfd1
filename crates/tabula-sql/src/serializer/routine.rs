use super::{Comma, Formatter, QualifiedName, ToSql};

use tabula_core::stmt;

impl ToSql for &stmt::CreateView {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let query = &self.query;
        fmt!(f, "CREATE VIEW " QualifiedName(&self.schema, &self.name) "\nAS\n" query);
    }
}

impl ToSql for &stmt::CreateFunction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "CREATE FUNCTION " QualifiedName(&self.schema, &self.name) " (" Comma(&self.parameters) ")");
        fmt!(f, "\nRETURNS TABLE\nAS\nRETURN\n(\n");
        f.indented(&self.query);
        fmt!(f, "\n)");
    }
}

impl ToSql for &stmt::CreateProcedure {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "CREATE PROCEDURE " QualifiedName(&self.schema, &self.name));

        let mut s = "\n    ";
        for parameter in &self.parameters {
            fmt!(f, s parameter);
            s = ",\n    ";
        }

        fmt!(f, "\nAS\nBEGIN\n    SET NOCOUNT ON;\n");
        f.indented(&self.query);
        fmt!(f, ";\nEND");
    }
}

impl ToSql for &stmt::Parameter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.name;
        fmt!(f, name);

        match &self.ty {
            Some(ty) => fmt!(f, " " ty),
            None => fmt!(f, " SQL_VARIANT"),
        }

        if let Some(default) = &self.default {
            fmt!(f, " = " default);
        }
    }
}
