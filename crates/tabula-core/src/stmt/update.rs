use super::{SourceTable, Where};

/// `UPDATE [schema].[table] SET ... WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: SourceTable,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Where>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub param: String,
}
