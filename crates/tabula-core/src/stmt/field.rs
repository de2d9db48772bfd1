use crate::{Error, Result};

/// A reference to a value in a row: a real column, a path into the JSON
/// document, or a raw SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Column(FieldColumn),
    Json(FieldJson),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldColumn {
    /// Alias of the table the column belongs to, if qualified
    pub table: Option<String>,

    /// Column name, unquoted
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldJson {
    /// Alias of the table the JSON column belongs to, if qualified
    pub table: Option<String>,

    /// Name of the JSON text column
    pub column: String,

    /// Dotted property path inside the document, without the leading `$.`
    pub path: String,
}

impl Field {
    /// Reference a column by name. Fails when the name is empty.
    pub fn column(name: impl Into<String>) -> Result<Field> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_statement("field reference is empty"));
        }
        Ok(Field::Column(FieldColumn { table: None, name }))
    }

    /// Reference a property inside the JSON document stored in `column`.
    pub fn json(column: impl Into<String>, path: impl Into<String>) -> Result<Field> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(Error::invalid_statement("JSON path is empty"));
        }
        Ok(Field::Json(FieldJson {
            table: None,
            column: column.into(),
            path,
        }))
    }

    pub fn raw(sql: impl Into<String>) -> Field {
        Field::Raw(sql.into())
    }

    /// Qualify the field with a table alias.
    pub fn qualify(self, alias: impl Into<String>) -> Field {
        match self {
            Field::Column(column) => Field::Column(FieldColumn {
                table: Some(alias.into()),
                ..column
            }),
            Field::Json(json) => Field::Json(FieldJson {
                table: Some(alias.into()),
                ..json
            }),
            raw => raw,
        }
    }

    /// The name a parameter for this field is derived from.
    pub fn logical_name(&self) -> &str {
        match self {
            Field::Column(column) => &column.name,
            Field::Json(json) => &json.path,
            Field::Raw(_) => "p",
        }
    }
}
