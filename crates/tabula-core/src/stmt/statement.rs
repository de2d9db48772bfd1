use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(Query),
    Delete(Delete),
    Insert(Insert),
    Update(Update),
    CreateView(CreateView),
    CreateFunction(CreateFunction),
    CreateProcedure(CreateProcedure),
}

impl Statement {
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Query(_) => "query",
            Statement::Delete(_) => "delete",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::CreateView(_) => "create view",
            Statement::CreateFunction(_) => "create function",
            Statement::CreateProcedure(_) => "create procedure",
        }
    }

    /// Returns `true` if the statement produces rows.
    pub fn returns_rows(&self) -> bool {
        match self {
            Statement::Query(_) => true,
            Statement::Insert(insert) => insert.output.is_some(),
            _ => false,
        }
    }
}

macro_rules! impl_from_stmt {
    ($($variant:ident($t:ty)),*) => {
        $(
            impl From<$t> for Statement {
                fn from(value: $t) -> Self {
                    Statement::$variant(value)
                }
            }
        )*
    };
}

impl_from_stmt!(
    Query(Query),
    Delete(Delete),
    Insert(Insert),
    Update(Update),
    CreateView(CreateView),
    CreateFunction(CreateFunction),
    CreateProcedure(CreateProcedure)
);

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(Query::Select(value))
    }
}

impl From<Union> for Statement {
    fn from(value: Union) -> Self {
        Statement::Query(Query::Union(value))
    }
}
