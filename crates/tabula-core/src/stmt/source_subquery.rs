use super::Query;

/// A nested query used as a row source: `(\n    ...\n) alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSubquery {
    pub query: Box<Query>,
    pub alias: String,
}

impl SourceSubquery {
    pub fn new(query: impl Into<Query>, alias: impl Into<String>) -> Self {
        Self {
            query: Box::new(query.into()),
            alias: alias.into(),
        }
    }
}
