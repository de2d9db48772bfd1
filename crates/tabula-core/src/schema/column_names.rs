use super::TableName;
use crate::{Error, Result};

use indexmap::IndexMap;

/// Supplies the physical column order of a table or view.
pub trait ColumnNameResolver: Send + Sync {
    fn column_names(&self, table: &TableName) -> Result<Vec<String>>;
}

/// A resolver backed by a fixed table list, for tests and for applications
/// that declare their tables up front.
#[derive(Debug, Default, Clone)]
pub struct StaticColumnNames {
    tables: IndexMap<TableName, Vec<String>>,
}

impl StaticColumnNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table<I, S>(mut self, table: TableName, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .insert(table, columns.into_iter().map(Into::into).collect());
        self
    }
}

impl ColumnNameResolver for StaticColumnNames {
    fn column_names(&self, table: &TableName) -> Result<Vec<String>> {
        self.tables.get(table).cloned().ok_or_else(|| {
            Error::invalid_statement(format!("no columns are known for table `{table}`"))
        })
    }
}
