mod builder;
pub use builder::Builder;

mod query;
pub use query::Query;

use crate::{
    builder::TableSource, document::DocumentRoot, Cursor, Document, DocumentWriter, Load,
    ReadContext, Result, SelectBuilder,
};

use std::{fmt, sync::Arc};
use tabula_core::{
    driver::{Command, Response},
    schema::{ColumnNameResolver, KeyStrategy, TableName},
    stmt::Value,
    Connection, Error,
};
use tracing::debug;

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    connection: Arc<dyn Connection>,
    cx: ReadContext,

    /// Schema of tables named without one
    schema: String,

    column_names: Option<Arc<dyn ColumnNameResolver>>,
}

/// A database handle. Cloning is cheap; all clones share the connection
/// and configuration.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A query over the table of `T`'s document map.
    pub fn query<T: Document + Load>(&self) -> Result<Query<T>> {
        let schema = T::Root::document_map().schema();
        let table = match &self.shared.column_names {
            Some(resolver) => TableSource::resolve(&**resolver, schema.table.clone())?,
            None => TableSource::new(schema.table.clone(), schema.column_names()),
        };

        Ok(Query::new(self.clone(), table.select()))
    }

    /// A table in the default schema, with its columns from the configured
    /// column name resolver.
    pub fn table(&self, name: &str) -> Result<TableSource> {
        let name = TableName::new(&self.shared.schema, name);
        match &self.shared.column_names {
            Some(resolver) => TableSource::resolve(&**resolver, name),
            None => Ok(TableSource::new(name, Vec::<String>::new())),
        }
    }

    /// Runs the query built by `builder` and reads its rows as `T`. The
    /// builder is finished.
    pub async fn fetch<T: Load>(&self, builder: &SelectBuilder) -> Result<Cursor<T>> {
        let command = builder.to_command()?;
        self.cursor(command).await
    }

    /// Inserts `doc`. An identity key generated by the database is written
    /// back into `doc`.
    pub async fn insert<R: DocumentRoot>(&self, doc: &mut R) -> Result<()> {
        let map = R::document_map();
        let command = self.writer().insert(doc)?;

        let response = self.exec(command).await?;
        if map.schema().id.strategy != KeyStrategy::Identity {
            response.rows.into_count()?;
            return Ok(());
        }

        let mut rows = response.rows.into_stream()?;
        let id = match rows.next().await {
            Some(row) => row?.take(0),
            None => {
                return Err(Error::invalid_result(
                    "insert returned no row carrying the generated id",
                ))
            }
        };

        map.id().assign(doc, id)
    }

    /// Updates `doc`, returning the number of rows written. Zero means the
    /// row is gone or, when the map declares a row version, was changed by
    /// someone else.
    pub async fn update<R: DocumentRoot>(&self, doc: &R) -> Result<u64> {
        let command = self.writer().update(doc)?;
        self.exec(command).await?.rows.into_count()
    }

    pub async fn delete_by_id<R: DocumentRoot>(&self, id: impl Into<Value>) -> Result<u64> {
        let command = self.writer().delete::<R>(id)?;
        self.exec(command).await?.rows.into_count()
    }

    /// Links `child` to `parent` through the related documents `related` of
    /// `R`.
    pub async fn link<R: DocumentRoot>(
        &self,
        related: &str,
        parent: impl Into<Value>,
        child: impl Into<Value>,
    ) -> Result<()> {
        let command = self.writer().link::<R>(related, parent, child)?;
        self.exec(command).await?.rows.into_count()?;
        Ok(())
    }

    /// Executes a command as-is.
    pub async fn exec(&self, command: Command) -> Result<Response> {
        debug!(
            sql = %command.sql,
            params = command.parameters.len(),
            "executing command"
        );
        self.shared.connection.exec(command).await
    }

    pub fn read_context(&self) -> &ReadContext {
        &self.shared.cx
    }

    pub(crate) async fn cursor<T: Load>(&self, command: Command) -> Result<Cursor<T>> {
        let rows = self.exec(command).await?.rows.into_stream()?;
        Cursor::new(self.shared.cx.clone(), rows)
    }

    fn writer(&self) -> DocumentWriter<'_> {
        DocumentWriter::new(&self.shared.cx)
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("connection", &self.shared.connection)
            .field("schema", &self.shared.schema)
            .field("cx", &self.shared.cx)
            .finish_non_exhaustive()
    }
}
