use super::{Parameter, Query};

/// `CREATE VIEW [schema].[name] AS ...`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateView {
    pub schema: String,
    pub name: String,
    pub query: Query,
}

/// Inline table-valued function returning `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFunction {
    pub schema: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub query: Query,
}

/// Stored procedure whose body is `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProcedure {
    pub schema: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub query: Query,
}
