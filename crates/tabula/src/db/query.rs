use super::Db;
use crate::{
    document::DocumentRoot,
    stmt::{Expr, Field},
    writer::related_document,
    Cursor, Document, Load, Result, SelectBuilder,
};

use std::{fmt, marker::PhantomData};
use tabula_core::stmt::Value;

/// A query over the documents `T`.
///
/// Like [`SelectBuilder`], every method returns a new query and each
/// terminal finishes the query it is called on. Unless ordered otherwise,
/// documents come back in id order.
pub struct Query<T> {
    db: Db,
    builder: SelectBuilder,
    _p: PhantomData<fn() -> T>,
}

impl<T: Document + Load> Query<T> {
    pub(crate) fn new(db: Db, builder: SelectBuilder) -> Self {
        Self {
            db,
            builder,
            _p: PhantomData,
        }
    }

    fn derive(&self, builder: SelectBuilder) -> Query<T> {
        Query::new(self.db.clone(), builder)
    }

    /// Layers a typed predicate.
    pub fn filter(&self, expr: Expr<bool>) -> Result<Query<T>> {
        Ok(self.derive(self.builder.where_expr(expr.as_untyped())?))
    }

    pub fn order_by<D, V>(&self, field: Field<D, V>) -> Result<Query<T>> {
        Ok(self.derive(self.builder.order_by(field.name())?))
    }

    pub fn order_by_desc<D, V>(&self, field: Field<D, V>) -> Result<Query<T>> {
        Ok(self.derive(self.builder.order_by_desc(field.name())?))
    }

    pub fn take(&self, n: u64) -> Result<Query<T>> {
        Ok(self.derive(self.builder.take(n)?))
    }

    /// Restricts the query to the documents linked to `parent` through the
    /// related documents `name` of the root.
    pub fn related(&self, name: &str, parent: impl Into<Value>) -> Result<Query<T>> {
        let schema = T::Root::document_map().schema();
        let related = related_document(schema, name)?;
        Ok(self.derive(
            self.builder
                .where_related(related, &schema.id.name, parent)?,
        ))
    }

    /// The underlying builder, for clauses the typed surface does not cover.
    pub fn builder(&self) -> &SelectBuilder {
        &self.builder
    }

    pub async fn to_list(&self) -> Result<Vec<T>> {
        self.rows("to_list", None).await?.collect().await
    }

    /// The first document in query order.
    pub async fn first(&self) -> Result<Option<T>> {
        let mut cursor = self.rows("first", Some(1)).await?;
        cursor.next().await.transpose()
    }

    /// Number of rows matched. Rows of variants `T` does not accept are
    /// counted too.
    pub async fn count(&self) -> Result<i64> {
        let prepared = self.builder.prepare_count("count")?;
        let mut cursor = self.db.cursor::<i64>(prepared.command()).await?;
        Ok(cursor.next().await.transpose()?.unwrap_or_default())
    }

    pub async fn any(&self) -> Result<bool> {
        let prepared = self.builder.prepare_count("any")?;
        let mut cursor = self.db.cursor::<i64>(prepared.command()).await?;
        Ok(cursor.next().await.transpose()?.unwrap_or_default() > 0)
    }

    pub async fn stream(&self) -> Result<Cursor<T>> {
        self.rows("stream", None).await
    }

    /// Deletes the matched rows, returning how many were deleted.
    pub async fn delete(&self) -> Result<u64> {
        let prepared = self.builder.prepare_delete("delete")?;
        self.db.exec(prepared.command()).await?.rows.into_count()
    }

    async fn rows(&self, method: &'static str, top: Option<u64>) -> Result<Cursor<T>> {
        let id = &T::Root::document_map().schema().id.name;
        let prepared = self.builder.prepare_rows(method, id, top)?;
        self.db.cursor(prepared.command()).await
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("type", &std::any::type_name::<T>())
            .field("builder", &self.builder)
            .finish()
    }
}
