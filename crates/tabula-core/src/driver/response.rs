use super::RowStream;
use crate::{Error, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the command
    Count(u64),

    /// Result rows
    Stream(RowStream),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn stream(rows: RowStream) -> Self {
        Self {
            rows: Rows::Stream(rows),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Stream(_) => Err(Error::invalid_result(
                "expected an affected-row count, the connection returned rows",
            )),
        }
    }

    pub fn into_stream(self) -> Result<RowStream> {
        match self {
            Rows::Stream(rows) => Ok(rows),
            Rows::Count(_) => Err(Error::invalid_result(
                "expected rows, the connection returned an affected-row count",
            )),
        }
    }
}
