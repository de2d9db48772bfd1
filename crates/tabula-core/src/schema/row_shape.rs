use crate::stmt::SqlType;

/// One column of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub ty: SqlType,
}

/// Ordered columns of a result set, as reported by the connection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowShape {
    pub columns: Vec<ColumnInfo>,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, ty: SqlType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl RowShape {
    pub fn new(columns: Vec<ColumnInfo>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Case-insensitive column position.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(name))
    }

    pub fn name(&self, index: usize) -> &str {
        self.columns
            .get(index)
            .map(|column| column.name.as_str())
            .unwrap_or("?")
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Column names joined in order. Two shapes with the same key read
    /// identically.
    pub fn key(&self) -> String {
        let mut key = String::new();
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                key.push(',');
            }
            key.push_str(name);
        }
        key
    }
}

impl FromIterator<ColumnInfo> for RowShape {
    fn from_iter<T: IntoIterator<Item = ColumnInfo>>(iter: T) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
