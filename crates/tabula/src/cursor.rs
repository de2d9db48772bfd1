use crate::{
    reader::{plan_for, ReaderPlan},
    Load, ReadContext, Result,
};

use std::sync::Arc;
use tabula_core::driver::RowStream;

/// Rows of a query, materialized one at a time.
pub struct Cursor<T> {
    rows: RowStream,
    plan: Arc<ReaderPlan<T>>,
    cx: ReadContext,

    /// Number of rows pulled so far, for error context
    row: usize,
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

impl<T: Load> Cursor<T> {
    /// Compiles (or fetches from the cache) the plan for the shape of
    /// `rows`. Fails before any row is read when the shape cannot produce a
    /// `T`.
    pub(crate) fn new(cx: ReadContext, rows: RowStream) -> Result<Self> {
        let plan = plan_for::<T>(rows.shape())?;
        Ok(Self {
            rows,
            plan,
            cx,
            row: 0,
        })
    }

    /// Returns the next materialized row. Rows the plan excludes are
    /// skipped.
    pub async fn next(&mut self) -> Option<Result<T>> {
        loop {
            let record = match self.rows.next().await? {
                Ok(record) => record,
                Err(err) => return Some(Err(err)),
            };

            let row = self.row;
            self.row += 1;

            match self.plan.read(&self.cx, row, record) {
                Ok(Some(value)) => return Some(Ok(value)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }

    /// Collect all values
    pub async fn collect<B>(mut self) -> Result<B>
    where
        B: FromCursor<T>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }
}

impl<T> std::fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("rows", &self.rows)
            .field("row", &self.row)
            .finish_non_exhaustive()
    }
}
