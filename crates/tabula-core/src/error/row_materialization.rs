use super::Error;

/// Context attached to any error raised while materializing a row.
#[derive(Debug)]
pub(super) struct RowMaterialization {
    row: usize,
    column_index: usize,
    column_name: Box<str>,
}

impl std::error::Error for RowMaterialization {}

impl core::fmt::Display for RowMaterialization {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to materialize row {} at column {} `{}`",
            self.row, self.column_index, self.column_name
        )
    }
}

impl Error {
    /// Creates the row context used to wrap materialization failures.
    ///
    /// Rows are numbered from zero in the order the connection produced them.
    pub fn row_materialization(
        row: usize,
        column_index: usize,
        column_name: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::RowMaterialization(RowMaterialization {
            row,
            column_index,
            column_name: column_name.into().into(),
        }))
    }

    /// Returns `true` if this error was raised while materializing a row.
    pub fn is_row_materialization(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::RowMaterialization(_)))
    }
}
