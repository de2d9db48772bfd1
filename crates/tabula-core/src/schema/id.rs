use crate::stmt::SqlType;

#[derive(Debug, Clone, PartialEq)]
pub struct IdColumn {
    pub name: String,
    pub ty: SqlType,
    pub strategy: KeyStrategy,
}

/// Who assigns the primary key of a new document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStrategy {
    /// The caller sets the id before inserting
    #[default]
    Assigned,

    /// The database generates it; inserts omit the column and read it back
    Identity,
}

impl IdColumn {
    pub fn new(name: impl Into<String>, ty: SqlType, strategy: KeyStrategy) -> Self {
        Self {
            name: name.into(),
            ty,
            strategy,
        }
    }
}
