use super::SelectBuilder;
use crate::Result;

use tabula_core::{
    schema::{ColumnNameResolver, TableName},
    stmt::{validate_alias, SourceTable},
};

/// A table or view to build statements over, with its physical column
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    table: SourceTable,
}

impl TableSource {
    /// A source whose columns are known up front. An empty column list
    /// accepts any field name as a column.
    pub fn new<I, S>(name: TableName, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        Self {
            table: SourceTable::new(name.schema, name.name, columns),
        }
    }

    /// A source whose columns are looked up through `resolver`.
    pub fn resolve(resolver: &dyn ColumnNameResolver, name: TableName) -> Result<Self> {
        let columns = resolver.column_names(&name)?;
        Ok(Self::new(name, columns))
    }

    /// The same table under `alias`, which must be a plain identifier.
    pub fn alias(&self, alias: &str) -> Result<Self> {
        validate_alias(alias)?;
        Ok(Self {
            table: self.table.clone().with_alias(alias),
        })
    }

    pub fn select(&self) -> SelectBuilder {
        SelectBuilder::from_table(self.table.clone())
    }

    pub(crate) fn table(&self) -> &SourceTable {
        &self.table
    }
}
