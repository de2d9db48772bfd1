use super::Select;
use crate::{Error, Result};

/// `UNION` / `UNION ALL` of two or more selects.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    pub operands: Vec<Select>,
    pub all: bool,
}

impl Union {
    pub fn new(operands: Vec<Select>, all: bool) -> Result<Self> {
        if operands.len() < 2 {
            return Err(Error::invalid_statement(
                "UNION requires at least two queries",
            ));
        }
        Ok(Self { operands, all })
    }
}
