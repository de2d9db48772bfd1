use super::{Field, Operand, Source};
use crate::{Error, Result};

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub source: Source,
    pub on: Vec<JoinOn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    LeftHash,
    Cross,
}

/// One `left op right` condition of a join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOn {
    pub left: Field,
    pub operand: Operand,
    pub right: Field,
}

impl Join {
    pub fn new(kind: JoinKind, source: impl Into<Source>, on: Vec<JoinOn>) -> Self {
        Self {
            kind,
            source: source.into(),
            on,
        }
    }

    /// Cross joins take no conditions; every other kind needs at least one.
    pub fn validate(&self) -> Result<()> {
        match (self.kind, self.on.len()) {
            (JoinKind::Cross, 0) => Ok(()),
            (JoinKind::Cross, n) => Err(Error::invalid_statement(format!(
                "CROSS JOIN cannot have ON clauses, found {n}"
            ))),
            (kind, 0) => Err(Error::invalid_statement(format!(
                "{kind} requires at least one ON clause"
            ))),
            _ => Ok(()),
        }
    }
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::LeftHash => "LEFT HASH JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl JoinOn {
    pub fn new(left: Field, operand: Operand, right: Field) -> Result<Self> {
        if operand.unary_token().is_none() || operand.is_pattern() {
            return Err(Error::invalid_statement(format!(
                "operand {operand} cannot be used in an ON clause"
            )));
        }
        Ok(Self {
            left,
            operand,
            right,
        })
    }

    pub fn eq(left: Field, right: Field) -> Self {
        Self {
            left,
            operand: Operand::Equal,
            right,
        }
    }
}
