use super::{Comma, Formatter, Ident, ToSql};

use tabula_core::stmt::{self, Columns, Direction, SelectColumn};

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = &self.columns;
        let source = &self.source;
        fmt!(f, "SELECT " self.row_selection columns " FROM " source);

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if let Some(group_by) = &self.group_by {
            fmt!(f, " GROUP BY " group_by);
        }

        if let Some(order_by) = self.order_by.as_ref().filter(|_| self.renders_order_by()) {
            fmt!(f, " ORDER BY " order_by);
        }

        if !self.options.is_empty() {
            let options = self.options.iter().map(|option| option.keyword());
            fmt!(f, " OPTION (" Comma(options) ")");
        }
    }
}

impl ToSql for stmt::RowSelection {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.distinct {
            fmt!(f, "DISTINCT ");
        }

        if let Some(top) = self.top {
            fmt!(f, "TOP (" top.to_string() ") ");
        }
    }
}

impl ToSql for &Columns {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Columns::All => fmt!(f, "*"),
            Columns::Count => fmt!(f, "COUNT(*)"),
            Columns::List(columns) => fmt!(f, Comma(columns)),
        }
    }
}

struct Alias<'a>(Option<&'a String>);

impl ToSql for Alias<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(alias) = self.0 {
            fmt!(f, " AS " Ident(alias));
        }
    }
}

impl ToSql for &SelectColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            SelectColumn::All => fmt!(f, "*"),
            SelectColumn::Field { field, alias } => {
                fmt!(f, field Alias(alias.as_ref()));
            }
            SelectColumn::Aggregate { func, field, alias } => {
                fmt!(f, func.name() "(");
                match field {
                    Some(field) => fmt!(f, field),
                    None => fmt!(f, "*"),
                }
                fmt!(f, ")" Alias(alias.as_ref()));
            }
            SelectColumn::RowNumber(row_number) => {
                fmt!(f, "ROW_NUMBER() OVER (");
                if !row_number.partition_by.is_empty() {
                    fmt!(f, "PARTITION BY " Comma(&row_number.partition_by) " ");
                }
                let order_by = &row_number.order_by;
                fmt!(f, "ORDER BY " order_by ") AS " Ident(&row_number.alias));
            }
        }
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Comma(&self.fields));
    }
}

impl ToSql for &stmt::OrderByField {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let field = &self.field;
        match self.direction {
            Direction::Asc => fmt!(f, field),
            Direction::Desc => fmt!(f, field " DESC"),
        }
    }
}

impl ToSql for &stmt::GroupBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Comma(&self.fields));
    }
}
