//! Mapping metadata describing how documents are stored in tables.

mod column;
pub use column::{ColumnDirection, ColumnSchema};

mod column_names;
pub use column_names::{ColumnNameResolver, StaticColumnNames};

mod document;
pub use document::DocumentSchema;

mod id;
pub use id::{IdColumn, KeyStrategy};

mod json_format;
pub use json_format::{is_json_column, JsonFormat, JSON_BLOB_COLUMN, JSON_COLUMN};

mod related;
pub use related::RelatedDocument;

mod row_shape;
pub use row_shape::{ColumnInfo, RowShape};

mod table_name;
pub use table_name::TableName;
