use crate::{stmt::SqlType, TypeKey};

/// An indexed column of a document table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    pub name: String,
    pub ty: SqlType,
    pub nullable: bool,

    /// Maximum length in characters (text) or bytes (binary)
    pub max_length: Option<usize>,

    pub direction: ColumnDirection,

    /// When set, only these variants carry the column
    pub variants: Vec<TypeKey>,
}

/// Which way values flow between the document and the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnDirection {
    /// Written on insert/update, never read back
    ToDb,

    /// Read from query results, never written
    FromDb,

    #[default]
    Both,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, ty: SqlType) -> Self {
        let max_length = match ty {
            SqlType::NVarChar(crate::stmt::Length::Fixed(n))
            | SqlType::VarChar(crate::stmt::Length::Fixed(n))
            | SqlType::VarBinary(crate::stmt::Length::Fixed(n)) => Some(n as usize),
            _ => None,
        };

        Self {
            name: name.into(),
            ty,
            nullable: true,
            max_length,
            direction: ColumnDirection::Both,
            variants: vec![],
        }
    }

    pub fn applies_to(&self, variant: TypeKey) -> bool {
        self.variants.is_empty() || self.variants.contains(&variant)
    }
}

impl ColumnDirection {
    pub fn reads(self) -> bool {
        matches!(self, Self::FromDb | Self::Both)
    }

    pub fn writes(self) -> bool {
        matches!(self, Self::ToDb | Self::Both)
    }
}
