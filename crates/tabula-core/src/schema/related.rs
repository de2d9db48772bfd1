use super::TableName;

/// A many-to-many relation stored in a link table.
///
/// The link table holds `(parent_column, child_column)` pairs; the child ids
/// point at the related documents' table.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedDocument {
    pub name: String,
    pub link_table: TableName,
    pub parent_column: String,
    pub child_column: String,
}

impl RelatedDocument {
    pub fn new(
        name: impl Into<String>,
        link_table: TableName,
        parent_column: impl Into<String>,
        child_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            link_table,
            parent_column: parent_column.into(),
            child_column: child_column.into(),
        }
    }
}
