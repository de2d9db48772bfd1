use super::{Comma, Formatter, Ident, QualifiedName, ToSql};

use tabula_core::stmt::{self, Query, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Query(query) => fmt!(f, query),
            Statement::Delete(delete) => fmt!(f, delete),
            Statement::Insert(insert) => fmt!(f, insert),
            Statement::Update(update) => fmt!(f, update),
            Statement::CreateView(view) => fmt!(f, view),
            Statement::CreateFunction(function) => fmt!(f, function),
            Statement::CreateProcedure(procedure) => fmt!(f, procedure),
        }
    }
}

impl ToSql for &Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Query::Select(select) => fmt!(f, select),
            Query::Union(union) => fmt!(f, union),
        }
    }
}

impl ToSql for &stmt::Union {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let separator = if self.all {
            "\nUNION ALL\n"
        } else {
            "\nUNION\n"
        };

        let mut s = "";
        for select in &self.operands {
            fmt!(f, s select);
            s = separator;
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = QualifiedName(&self.table.schema, &self.table.table);
        fmt!(f, "DELETE FROM " table);
        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = QualifiedName(&self.table.schema, &self.table.table);
        let columns = Comma(self.columns.iter().map(Ident));
        fmt!(f, "INSERT INTO " table " (" columns ")");

        if let Some(output) = &self.output {
            fmt!(f, " OUTPUT INSERTED." Ident(output));
        }

        fmt!(f, " VALUES (" Comma(&self.values) ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = QualifiedName(&self.table.schema, &self.table.table);
        fmt!(f, "UPDATE " table " SET " Comma(&self.assignments));
        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let param = &self.param;
        fmt!(f, Ident(&self.column) " = " param);
    }
}
