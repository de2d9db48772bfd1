use super::ReadContext;
use crate::Result;

use std::fmt;
use tabula_core::stmt::ValueRecord;

type ReadFn<T> = Box<dyn Fn(&ReadContext, usize, ValueRecord) -> Result<Option<T>> + Send + Sync>;

/// Converts one row of a known shape into a `T`.
///
/// `None` means the row is excluded from the result: it belongs to a variant
/// the requested type does not accept, or it was hidden by the type
/// resolver.
pub struct ReaderPlan<T> {
    read: ReadFn<T>,
}

impl<T> ReaderPlan<T> {
    pub fn new<F>(read: F) -> Self
    where
        F: Fn(&ReadContext, usize, ValueRecord) -> Result<Option<T>> + Send + Sync + 'static,
    {
        Self {
            read: Box::new(read),
        }
    }

    /// Reads row number `row`. Failures carry the row number and the column
    /// being processed.
    pub fn read(&self, cx: &ReadContext, row: usize, record: ValueRecord) -> Result<Option<T>> {
        (self.read)(cx, row, record)
    }
}

impl<T> fmt::Debug for ReaderPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderPlan")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
