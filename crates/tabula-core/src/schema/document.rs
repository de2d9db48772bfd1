use super::*;

use std::sync::atomic::{AtomicBool, Ordering};

/// Untyped description of how one document hierarchy maps to a table.
///
/// There is exactly one schema per root document type. Subtypes share it;
/// columns that only some variants carry list those variants.
#[derive(Debug)]
pub struct DocumentSchema {
    /// Name of the root document type
    pub name: &'static str,

    pub table: TableName,

    pub id: IdColumn,

    /// Indexed columns besides the id, type and row version columns
    pub columns: Vec<ColumnSchema>,

    /// Column holding the concrete variant of each row
    pub type_column: Option<String>,

    pub json: JsonFormat,

    pub row_version: Option<String>,

    pub related: Vec<RelatedDocument>,

    /// Set once a document's JSON text crossed the large-document threshold.
    /// Never cleared.
    prefer_streaming: AtomicBool,
}

impl DocumentSchema {
    pub fn new(name: &'static str, table: TableName, id: IdColumn) -> Self {
        Self {
            name,
            table,
            id,
            columns: vec![],
            type_column: None,
            json: JsonFormat::TextOnly,
            row_version: None,
            related: vec![],
            prefer_streaming: AtomicBool::new(false),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    pub fn related(&self, name: &str) -> Option<&RelatedDocument> {
        self.related
            .iter()
            .find(|related| related.name.eq_ignore_ascii_case(name))
    }

    pub fn is_type_column(&self, name: &str) -> bool {
        self.type_column
            .as_deref()
            .is_some_and(|column| column.eq_ignore_ascii_case(name))
    }

    pub fn is_row_version(&self, name: &str) -> bool {
        self.row_version
            .as_deref()
            .is_some_and(|column| column.eq_ignore_ascii_case(name))
    }

    /// Physical column order used when no column-name resolver is
    /// configured: id, type, indexed columns, row version, then JSON.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = vec![self.id.name.clone()];
        names.extend(self.type_column.iter().cloned());
        names.extend(self.columns.iter().map(|column| column.name.clone()));
        names.extend(self.row_version.iter().cloned());
        names.extend(
            self.json
                .required_columns()
                .iter()
                .map(|name| name.to_string()),
        );
        names
    }

    pub fn prefers_streaming(&self) -> bool {
        self.prefer_streaming.load(Ordering::Relaxed)
    }

    /// Switches the schema to streaming deserialization. Returns `true` for
    /// the call that flipped the flag.
    pub fn mark_streaming(&self) -> bool {
        !self.prefer_streaming.swap(true, Ordering::Relaxed)
    }
}
