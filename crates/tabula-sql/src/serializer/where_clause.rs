use super::{Comma, Formatter, ToSql};

use tabula_core::stmt::Where;

impl ToSql for &Where {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for clause in self.conjuncts() {
            fmt!(f, s "(" Clause(clause) ")");
            s = "\nAND ";
        }
    }
}

/// One conjunct, without the surrounding parentheses.
struct Clause<'a>(&'a Where);

impl ToSql for Clause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Where::Unary(w) => {
                // The operand is checked when the clause is constructed
                let token = w.operand.unary_token().unwrap_or("=");
                let (field, param) = (&w.field, &w.param);
                fmt!(f, field " " token " " param);
            }
            Where::Binary(w) => {
                let (field, low, high) = (&w.field, &w.low, &w.high);
                fmt!(f, field " BETWEEN " low " AND " high);
            }
            Where::Array(w) => {
                let token = w.operand.array_token().unwrap_or("IN");
                let field = &w.field;
                fmt!(f, field " " token " (" Comma(&w.params) ")");
            }
            Where::IsNull(w) => {
                let token = if w.negate { " IS NOT NULL" } else { " IS NULL" };
                let field = &w.field;
                fmt!(f, field token);
            }
            Where::Custom(sql) => fmt!(f, sql),
            Where::InSubquery(w) => {
                let field = &w.field;
                fmt!(f, field " IN (\n");
                f.indented(&*w.select);
                fmt!(f, "\n)");
            }
            and @ Where::And(_) => fmt!(f, and),
        }
    }
}
