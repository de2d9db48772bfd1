use super::*;
use crate::{Error, Result};

/// `SELECT {row selection}{columns} FROM {source} ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub row_selection: RowSelection,
    pub columns: Columns,
    pub source: Source,
    pub filter: Option<Where>,
    pub group_by: Option<GroupBy>,
    pub order_by: Option<OrderBy>,
    pub options: Vec<QueryOption>,
}

/// Query hints rendered inside a trailing `OPTION (...)`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOption {
    Recompile,
    OptimizeForUnknown,
    MaxDop(u32),
    Raw(String),
}

impl Select {
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            row_selection: RowSelection::default(),
            columns: Columns::All,
            source: source.into(),
            filter: None,
            group_by: None,
            order_by: None,
            options: vec![],
        }
    }

    /// Returns `true` when a statement-level `ORDER BY` would be rendered.
    pub fn renders_order_by(&self) -> bool {
        self.order_by.is_some() && self.group_by.is_none() && !self.columns.is_aggregate()
    }

    pub fn and_where(&mut self, clause: Where) {
        self.filter = Where::and(self.filter.take().into_iter().chain([clause]));
    }

    /// Adds a `ROW_NUMBER()` window column.
    ///
    /// When `order_by` is `None` the statement's own ordering is reused. The
    /// statement-level `ORDER BY` is cleared either way.
    pub fn with_row_number(
        mut self,
        partition_by: Vec<Field>,
        order_by: Option<OrderBy>,
        alias: impl Into<String>,
    ) -> Result<Select> {
        let existing = self.order_by.take();
        let Some(order_by) = order_by.or(existing) else {
            return Err(Error::invalid_statement(
                "ROW_NUMBER requires an ORDER BY; none given and the statement has none",
            ));
        };

        self.columns.push(SelectColumn::RowNumber(RowNumber {
            partition_by,
            order_by,
            alias: alias.into(),
        }));
        Ok(self)
    }
}

impl QueryOption {
    pub fn keyword(&self) -> String {
        match self {
            QueryOption::Recompile => "RECOMPILE".into(),
            QueryOption::OptimizeForUnknown => "OPTIMIZE FOR UNKNOWN".into(),
            QueryOption::MaxDop(n) => format!("MAXDOP {n}"),
            QueryOption::Raw(sql) => sql.clone(),
        }
    }
}
