/// A table or view, schema-qualified, with the column names it is known to
/// expose in their physical order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTable {
    pub schema: String,
    pub table: String,
    pub columns: Vec<String>,
    pub alias: Option<String>,
}

impl SourceTable {
    pub fn new(schema: impl Into<String>, table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            columns,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Case-insensitive lookup returning the column's declared spelling.
    pub fn column(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}
