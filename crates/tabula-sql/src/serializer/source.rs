use super::{Delimited, Formatter, QualifiedName, ToSql};

use tabula_core::stmt::{self, Source};

impl ToSql for &Source {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Source::Table(table) => fmt!(f, table),
            Source::Subquery(subquery) => fmt!(f, subquery),
            Source::Joined(joined) => fmt!(f, joined),
        }
    }
}

impl ToSql for &stmt::SourceTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, QualifiedName(&self.schema, &self.table));
        if let Some(alias) = &self.alias {
            fmt!(f, " " alias);
        }
    }
}

impl ToSql for &stmt::SourceSubquery {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "(\n");
        f.indented(&*self.query);
        let alias = &self.alias;
        fmt!(f, "\n) " alias);
    }
}

impl ToSql for &stmt::SourceJoined {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &*self.root);
        for join in &self.joins {
            fmt!(f, "\n" join);
        }
    }
}

impl ToSql for &stmt::Join {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let source = &self.source;
        fmt!(f, self.kind.keyword() " " source);
        if !self.on.is_empty() {
            fmt!(f, " ON " Delimited(&self.on, " AND "));
        }
    }
}

impl ToSql for &stmt::JoinOn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let (left, right) = (&self.left, &self.right);
        let token = self.operand.unary_token().unwrap_or("=");
        fmt!(f, left " " token " " right);
    }
}
