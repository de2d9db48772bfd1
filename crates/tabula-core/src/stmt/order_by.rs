use super::Field;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub fields: Vec<OrderByField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByField {
    pub field: Field,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl OrderBy {
    /// Fails when `fields` is empty.
    pub fn new(fields: Vec<OrderByField>) -> Result<OrderBy> {
        if fields.is_empty() {
            return Err(Error::invalid_statement(
                "ORDER BY requires at least one field",
            ));
        }
        Ok(OrderBy { fields })
    }

    pub fn push(&mut self, field: OrderByField) {
        self.fields.push(field);
    }
}

impl OrderByField {
    pub fn asc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

impl From<OrderByField> for OrderBy {
    fn from(value: OrderByField) -> Self {
        Self {
            fields: vec![value],
        }
    }
}
