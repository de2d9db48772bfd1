use super::{Join, Source};
use crate::Result;

/// A root source followed by an ordered list of joins.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceJoined {
    pub root: Box<Source>,
    pub joins: Vec<Join>,
}

impl SourceJoined {
    /// Fails when any join has the wrong number of ON clauses for its kind.
    pub fn new(root: impl Into<Source>, joins: Vec<Join>) -> Result<Self> {
        for join in &joins {
            join.validate()?;
        }

        Ok(Self {
            root: Box::new(root.into()),
            joins,
        })
    }
}
