#![allow(dead_code)]

mod documents;
pub use documents::*;

use std::{
    collections::VecDeque,
    fmt,
    sync::{Arc, LazyLock, Mutex},
};
use tabula::{
    driver::{Command, Response, RowStream},
    schema::{ColumnInfo, RowShape},
    stmt::{SqlType, Value},
    Connection, Db, Result, StaticColumnNames, TableName,
};

/// A connection that records every command and replays canned responses in
/// order. Once the canned responses run out every command affects no rows.
#[derive(Clone, Default)]
pub struct FakeConnection {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    log: Vec<Command>,
    responses: VecDeque<Canned>,
}

enum Canned {
    Count(u64),
    Rows(Vec<&'static str>, Vec<Vec<Value>>),
}

impl FakeConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a result set. Column types do not matter to the reader, so
    /// every column is declared as `NVARCHAR(MAX)`.
    pub fn rows(&self, columns: &[&'static str], rows: Vec<Vec<Value>>) -> &Self {
        self.push(Canned::Rows(columns.to_vec(), rows))
    }

    pub fn count(&self, count: u64) -> &Self {
        self.push(Canned::Count(count))
    }

    /// Commands executed so far, oldest first.
    pub fn log(&self) -> Vec<Command> {
        self.inner.lock().unwrap().log.clone()
    }

    #[track_caller]
    pub fn last(&self) -> Command {
        self.log().pop().expect("no commands executed")
    }

    fn push(&self, canned: Canned) -> &Self {
        self.inner.lock().unwrap().responses.push_back(canned);
        self
    }
}

#[tabula::async_trait]
impl Connection for FakeConnection {
    async fn exec(&self, command: Command) -> Result<Response> {
        let mut inner = self.inner.lock().unwrap();
        inner.log.push(command);

        Ok(match inner.responses.pop_front() {
            Some(Canned::Count(count)) => Response::count(count),
            Some(Canned::Rows(columns, rows)) => {
                Response::stream(RowStream::from_rows(shape(&columns), rows))
            }
            None => Response::count(0),
        })
    }
}

impl fmt::Debug for FakeConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("FakeConnection")
            .field("executed", &inner.log.len())
            .field("pending", &inner.responses.len())
            .finish()
    }
}

pub fn shape(columns: &[&str]) -> RowShape {
    columns
        .iter()
        .map(|name| ColumnInfo::new(*name, SqlType::NVarChar(tabula::stmt::Length::Max)))
        .collect()
}

/// Physical column orders of the test tables.
pub static COLUMNS: LazyLock<StaticColumnNames> = LazyLock::new(|| {
    StaticColumnNames::new()
        .table(TableName::new("dbo", "Foo"), ["Id", "Int", "Name", "JSON"])
        .table(
            TableName::new("dbo", "Animal"),
            ["Id", "Type", "Name", "JSONBlob"],
        )
        .table(TableName::new("dbo", "Legacy"), ["Id", "JSON", "Int"])
        .table(TableName::new("dbo", "FooTags"), ["FooId", "TagId"])
        .table(
            TableName::new("dbo", "Ticket"),
            ["Id", "Kind", "JSON", "JSONBlob"],
        )
});

pub fn db(connection: &FakeConnection) -> Db {
    Db::builder()
        .column_names(COLUMNS.clone())
        .build(connection.clone())
}
