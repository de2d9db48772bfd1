use super::{SourceTable, Where};

/// `DELETE FROM [schema].[table] WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: SourceTable,
    pub filter: Option<Where>,
}
