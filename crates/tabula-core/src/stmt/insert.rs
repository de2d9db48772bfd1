use super::SourceTable;

/// `INSERT INTO ... (columns) [OUTPUT INSERTED.[col]] VALUES (params)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: SourceTable,

    /// Column names, paired positionally with `values`
    pub columns: Vec<String>,

    /// Parameter names, `@` included
    pub values: Vec<String>,

    /// Column whose inserted value is returned, used for identity keys
    pub output: Option<String>,
}
