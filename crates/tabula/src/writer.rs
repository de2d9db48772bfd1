//! Commands persisting documents.

use crate::{document::DocumentRoot, ReadContext, Result};

use tabula_core::{
    driver::Command,
    schema::{
        ColumnSchema, DocumentSchema, JsonFormat, KeyStrategy, RelatedDocument, JSON_BLOB_COLUMN,
        JSON_COLUMN,
    },
    stmt::{self, Assignment, Operand, SourceTable, Statement, Value, Where},
    Error, TypeKey,
};
use tabula_sql::ParameterSet;

/// Builds `INSERT`, `UPDATE` and `DELETE` commands from documents.
///
/// Every value is validated against its column before any SQL is produced.
#[derive(Debug)]
pub struct DocumentWriter<'a> {
    cx: &'a ReadContext,
}

/// Column values of one document, in column order.
#[derive(Default)]
struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(cx: &'a ReadContext) -> Self {
        Self { cx }
    }

    /// `INSERT` for `doc`. Identity keys are left to the database and
    /// returned by the command.
    pub fn insert<R: DocumentRoot>(&self, doc: &R) -> Result<Command> {
        let schema = R::document_map().schema();
        let identity = schema.id.strategy == KeyStrategy::Identity;

        let mut row = Row::default();
        if !identity {
            row.push_id::<R>(doc)?;
        }
        self.collect(doc, &mut row)?;

        let mut params = ParameterSet::new();
        let values = row
            .columns
            .iter()
            .zip(row.values)
            .map(|(column, value)| params.add(column, value))
            .collect();

        let insert = stmt::Insert {
            table: table(schema),
            columns: row.columns,
            values,
            output: identity.then(|| schema.id.name.clone()),
        };

        Ok(tabula_sql::assemble(&Statement::Insert(insert), &params))
    }

    /// `UPDATE` of every written column of `doc`, matched by id and, when the
    /// map declares one, by row version.
    pub fn update<R: DocumentRoot>(&self, doc: &R) -> Result<Command> {
        let map = R::document_map();
        let schema = map.schema();

        let mut row = Row::default();
        self.collect(doc, &mut row)?;

        let mut params = ParameterSet::new();
        let assignments = row
            .columns
            .into_iter()
            .zip(row.values)
            .map(|(column, value)| {
                let param = params.add(&column, value);
                Assignment { column, param }
            })
            .collect();

        let mut filter = vec![id_filter(schema, map.id_of(doc), &mut params)?];

        if let (Some(column), Some(accessor)) = (&schema.row_version, map.row_version()) {
            let version = accessor.read(doc)?;
            let param = params.add(column, version);
            filter.push(Where::unary(
                stmt::Field::column(column)?,
                Operand::Equal,
                param,
            )?);
        }

        let update = stmt::Update {
            table: table(schema),
            assignments,
            filter: Where::and(filter),
        };

        Ok(tabula_sql::assemble(&Statement::Update(update), &params))
    }

    /// `DELETE` of the document with the given id.
    pub fn delete<R: DocumentRoot>(&self, id: impl Into<Value>) -> Result<Command> {
        let schema = R::document_map().schema();

        let mut params = ParameterSet::new();
        let delete = stmt::Delete {
            table: table(schema),
            filter: Some(id_filter(schema, id.into(), &mut params)?),
        };

        Ok(tabula_sql::assemble(&Statement::Delete(delete), &params))
    }

    /// Inserts the link row relating `parent` to `child`.
    pub fn link<R: DocumentRoot>(
        &self,
        related: &str,
        parent: impl Into<Value>,
        child: impl Into<Value>,
    ) -> Result<Command> {
        let schema = R::document_map().schema();
        let related = related_document(schema, related)?;

        let mut params = ParameterSet::new();
        let columns = vec![related.parent_column.clone(), related.child_column.clone()];
        let values = vec![
            params.add(&related.parent_column, parent.into()),
            params.add(&related.child_column, child.into()),
        ];

        let insert = stmt::Insert {
            table: SourceTable::new(
                &related.link_table.schema,
                &related.link_table.name,
                columns.clone(),
            ),
            columns,
            values,
            output: None,
        };

        Ok(tabula_sql::assemble(&Statement::Insert(insert), &params))
    }

    /// Type column, indexed columns and JSON state of `doc`.
    fn collect<R: DocumentRoot>(&self, doc: &R, row: &mut Row) -> Result<()> {
        let map = R::document_map();
        let schema = map.schema();
        let variant = doc.type_key();

        if let Some(column) = &schema.type_column {
            let value = self.type_value(schema, variant)?;
            row.push(column, value);
        }

        for (column, accessor) in map.columns() {
            if !column.direction.writes() || !column.applies_to(variant) {
                continue;
            }

            let value = accessor.read(doc)?;
            validate(column, &value)?;
            row.push(&column.name, value);
        }

        if schema.json == JsonFormat::NoJson {
            return Ok(());
        }

        let json = doc.to_json()?;
        let serializer = self.cx.serializer();

        let text = || serializer.serialize_text(&json, schema).map(Value::from);
        let blob = || {
            serializer
                .serialize_compressed(&json, schema)
                .map(Value::from)
        };

        match schema.json {
            JsonFormat::TextOnly => row.push(JSON_COLUMN, text()?),
            JsonFormat::CompressedOnly => row.push(JSON_BLOB_COLUMN, blob()?),
            JsonFormat::MixedPreferText => {
                row.push(JSON_COLUMN, text()?);
                row.push(JSON_BLOB_COLUMN, Value::Null);
            }
            JsonFormat::MixedPreferCompressed => {
                row.push(JSON_COLUMN, Value::Null);
                row.push(JSON_BLOB_COLUMN, blob()?);
            }
            JsonFormat::NoJson => {}
        }

        Ok(())
    }

    fn type_value(&self, schema: &DocumentSchema, variant: TypeKey) -> Result<Value> {
        self.cx
            .resolver(schema.name)
            .resolve_value_from_type(variant)
            .ok_or_else(|| Error::unresolved_type(schema.name, variant.name()))
    }
}

impl Row {
    fn push(&mut self, column: &str, value: Value) {
        self.columns.push(column.to_string());
        self.values.push(value);
    }

    fn push_id<R: DocumentRoot>(&mut self, doc: &R) -> Result<()> {
        let map = R::document_map();
        let id = map.id_of(doc);
        if id.is_null() {
            return Err(Error::validation_not_nullable(&map.schema().id.name));
        }
        self.push(&map.schema().id.name, id);
        Ok(())
    }
}

fn validate(column: &ColumnSchema, value: &Value) -> Result<()> {
    if value.is_null() && !column.nullable {
        return Err(Error::validation_not_nullable(&column.name));
    }

    if let (Some(max), Some(len)) = (column.max_length, value.len()) {
        if len > max {
            return Err(Error::validation_max_length(&column.name, len, max));
        }
    }

    Ok(())
}

fn table(schema: &DocumentSchema) -> SourceTable {
    SourceTable::new(
        &schema.table.schema,
        &schema.table.name,
        schema.column_names(),
    )
}

fn id_filter(schema: &DocumentSchema, id: Value, params: &mut ParameterSet) -> Result<Where> {
    let param = params.add(&schema.id.name, id);
    Where::unary(stmt::Field::column(&schema.id.name)?, Operand::Equal, param)
}

pub(crate) fn related_document<'a>(
    schema: &'a DocumentSchema,
    name: &str,
) -> Result<&'a RelatedDocument> {
    schema.related(name).ok_or_else(|| {
        Error::invalid_statement(format!(
            "document `{}` declares no related documents named `{name}`",
            schema.name
        ))
    })
}
