use super::{Select, Union};

/// Anything that produces rows: a single select or a union of selects.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Select(Select),
    Union(Union),
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Query::Select(value)
    }
}

impl From<Union> for Query {
    fn from(value: Union) -> Self {
        Query::Union(value)
    }
}
