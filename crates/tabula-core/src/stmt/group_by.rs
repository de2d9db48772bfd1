use super::Field;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub fields: Vec<Field>,
}

impl GroupBy {
    pub fn new(fields: Vec<Field>) -> Result<GroupBy> {
        if fields.is_empty() {
            return Err(Error::invalid_statement(
                "GROUP BY requires at least one field",
            ));
        }
        Ok(GroupBy { fields })
    }
}
