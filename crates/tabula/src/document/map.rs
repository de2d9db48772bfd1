use crate::{stmt::Primitive, Result};

use std::{fmt, sync::Arc};
use tabula_core::{
    schema::{
        ColumnDirection, ColumnSchema, DocumentSchema, IdColumn, JsonFormat, KeyStrategy,
        RelatedDocument, TableName,
    },
    stmt::{SqlType, Value},
    PropertyHandler, TypeKey,
};

type Getter<R> = Box<dyn Fn(&R) -> Value + Send + Sync>;
type Setter<R> = Box<dyn Fn(&mut R, Value) -> Result<()> + Send + Sync>;

/// How one document hierarchy maps to a table, with typed accessors for
/// every mapped column.
///
/// Maps are built once per root type and live for the rest of the process,
/// typically in a `static LazyLock`.
pub struct DocumentMap<R> {
    schema: DocumentSchema,
    id: Accessor<R>,

    /// Parallel to `schema.columns`
    columns: Vec<Accessor<R>>,

    row_version: Option<Accessor<R>>,
}

pub(crate) struct Accessor<R> {
    get: Getter<R>,
    set: Setter<R>,
    handler: Option<Arc<dyn PropertyHandler>>,
}

/// A mapped column declared on a [`DocumentMapBuilder`].
pub struct Column<R> {
    schema: ColumnSchema,
    accessor: Accessor<R>,
}

pub struct DocumentMapBuilder<R> {
    schema: DocumentSchema,
    id: Accessor<R>,
    columns: Vec<Accessor<R>>,
    row_version: Option<Accessor<R>>,
}

impl<R: 'static> DocumentMap<R> {
    pub fn builder(
        name: &'static str,
        table: TableName,
        id: Column<R>,
        strategy: KeyStrategy,
    ) -> DocumentMapBuilder<R> {
        let Column { schema, accessor } = id;
        let id = IdColumn::new(schema.name, schema.ty, strategy);

        DocumentMapBuilder {
            schema: DocumentSchema::new(name, table, id),
            id: accessor,
            columns: vec![],
            row_version: None,
        }
    }

    pub fn schema(&self) -> &DocumentSchema {
        &self.schema
    }

    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub(crate) fn id(&self) -> &Accessor<R> {
        &self.id
    }

    pub(crate) fn row_version(&self) -> Option<&Accessor<R>> {
        self.row_version.as_ref()
    }

    /// Indexed columns with their accessors.
    pub(crate) fn columns(&self) -> impl Iterator<Item = (&ColumnSchema, &Accessor<R>)> {
        self.schema.columns.iter().zip(&self.columns)
    }

    /// Position of the indexed column `name` in [`Self::columns`].
    pub(crate) fn column_index(&self, name: &str) -> Option<usize> {
        self.schema
            .columns
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(name))
    }

    pub(crate) fn accessor(&self, index: usize) -> Option<(&ColumnSchema, &Accessor<R>)> {
        Some((self.schema.columns.get(index)?, self.columns.get(index)?))
    }

    /// The id of `doc`.
    pub fn id_of(&self, doc: &R) -> Value {
        (self.id.get)(doc)
    }
}

impl<R> Accessor<R> {
    /// Reads the column value of `doc`, passed through the property handler.
    pub(crate) fn read(&self, doc: &R) -> Result<Value> {
        let value = (self.get)(doc);
        match &self.handler {
            Some(handler) => handler.write(value),
            None => Ok(value),
        }
    }

    /// Assigns a column value to `doc`, passed through the property handler.
    pub(crate) fn assign(&self, doc: &mut R, value: Value) -> Result<()> {
        let value = match &self.handler {
            Some(handler) => handler.read(value)?,
            None => value,
        };
        (self.set)(doc, value)
    }
}

impl<R: 'static> Column<R> {
    /// A column read from and written to the property `V` through `get` and
    /// `set`. The SQL type and nullability default to those of `V`.
    pub fn new<V, G, S>(name: &str, get: G, set: S) -> Self
    where
        V: Primitive,
        G: Fn(&R) -> V + Send + Sync + 'static,
        S: Fn(&mut R, V) + Send + Sync + 'static,
    {
        let mut schema = ColumnSchema::new(name, V::SQL_TYPE);
        schema.nullable = V::NULLABLE;

        Self {
            schema,
            accessor: Accessor {
                get: Box::new(move |doc| get(doc).into_value()),
                set: Box::new(move |doc, value| {
                    set(doc, V::load(value)?);
                    Ok(())
                }),
                handler: None,
            },
        }
    }

    /// Overrides the SQL type. A fixed length also sets the maximum length.
    pub fn ty(mut self, ty: SqlType) -> Self {
        let nullable = self.schema.nullable;
        let direction = self.schema.direction;
        let variants = std::mem::take(&mut self.schema.variants);

        self.schema = ColumnSchema::new(std::mem::take(&mut self.schema.name), ty);
        self.schema.nullable = nullable;
        self.schema.direction = direction;
        self.schema.variants = variants;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.schema.nullable = nullable;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.schema.max_length = Some(max);
        self
    }

    pub fn direction(mut self, direction: ColumnDirection) -> Self {
        self.schema.direction = direction;
        self
    }

    /// Restricts the column to the given variants of a polymorphic root.
    pub fn variants(mut self, variants: &[TypeKey]) -> Self {
        self.schema.variants = variants.to_vec();
        self
    }

    /// Converts values through `handler` between the column and the property.
    pub fn handler(mut self, handler: impl PropertyHandler + 'static) -> Self {
        self.accessor.handler = Some(Arc::new(handler));
        self
    }
}

impl<R: 'static> DocumentMapBuilder<R> {
    pub fn column(&mut self, column: Column<R>) -> &mut Self {
        self.schema.columns.push(column.schema);
        self.columns.push(column.accessor);
        self
    }

    pub fn type_column(&mut self, name: &str) -> &mut Self {
        self.schema.type_column = Some(name.to_string());
        self
    }

    pub fn json(&mut self, format: JsonFormat) -> &mut Self {
        self.schema.json = format;
        self
    }

    /// Declares the optimistic concurrency column. It is read into the
    /// document and checked on update, never written.
    pub fn row_version(&mut self, column: Column<R>) -> &mut Self {
        self.schema.row_version = Some(column.schema.name);
        self.row_version = Some(column.accessor);
        self
    }

    pub fn related(&mut self, related: RelatedDocument) -> &mut Self {
        self.schema.related.push(related);
        self
    }

    pub fn build(self) -> DocumentMap<R> {
        DocumentMap {
            schema: self.schema,
            id: self.id,
            columns: self.columns,
            row_version: self.row_version,
        }
    }
}

impl<R> fmt::Debug for DocumentMap<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentMap")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("schema", &self.schema)
            .field("handler", &self.accessor.handler.is_some())
            .finish()
    }
}
