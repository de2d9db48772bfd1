use super::{Field, OrderBy};

/// The column selection of a `SELECT`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Columns {
    /// `*`
    #[default]
    All,

    /// An explicit list
    List(Vec<SelectColumn>),

    /// `COUNT(*)`
    Count,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectColumn {
    /// `*` inside a list, e.g. next to a window function
    All,

    Field {
        field: Field,
        alias: Option<String>,
    },

    Aggregate {
        func: Aggregate,
        /// `None` renders `*`
        field: Option<Field>,
        alias: Option<String>,
    },

    RowNumber(RowNumber),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Sum,
    Min,
    Max,
    Avg,
}

/// `ROW_NUMBER() OVER (PARTITION BY ... ORDER BY ...) AS [alias]`
#[derive(Debug, Clone, PartialEq)]
pub struct RowNumber {
    pub partition_by: Vec<Field>,
    pub order_by: OrderBy,
    pub alias: String,
}

impl Columns {
    pub fn fields(fields: impl IntoIterator<Item = Field>) -> Columns {
        Columns::List(
            fields
                .into_iter()
                .map(|field| SelectColumn::Field { field, alias: None })
                .collect(),
        )
    }

    /// Returns `true` when the selection collapses rows, which makes a
    /// statement-level `ORDER BY` invalid.
    pub fn is_aggregate(&self) -> bool {
        match self {
            Columns::Count => true,
            Columns::All => false,
            Columns::List(columns) => columns
                .iter()
                .any(|column| matches!(column, SelectColumn::Aggregate { .. })),
        }
    }

    pub fn push(&mut self, column: SelectColumn) {
        match self {
            Columns::List(columns) => columns.push(column),
            Columns::All => *self = Columns::List(vec![SelectColumn::All, column]),
            Columns::Count => *self = Columns::List(vec![column]),
        }
    }
}

impl Aggregate {
    pub fn name(self) -> &'static str {
        match self {
            Aggregate::Count => "COUNT",
            Aggregate::Sum => "SUM",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
            Aggregate::Avg => "AVG",
        }
    }
}
