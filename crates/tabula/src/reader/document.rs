use super::{ReadContext, ReaderPlan};
use crate::{
    document::{variants_of, Document, DocumentRoot},
    Error, Result,
};

use tabula_core::{
    schema::{is_json_column, DocumentSchema, JsonFormat, RowShape, JSON_BLOB_COLUMN, JSON_COLUMN},
    stmt::{Value, ValueRecord},
    TypeKey,
};
use tracing::{debug, trace};

/// Column handling steps for one result shape.
struct DocumentPlan {
    id: usize,

    /// Position of the type column, with the variants it can resolve to
    type_column: Option<usize>,
    variants: Vec<TypeKey>,

    json: Option<usize>,
    blob: Option<usize>,

    assignments: Vec<Assignment>,

    /// Column names, for error context
    columns: Vec<String>,
}

struct Assignment {
    position: usize,
    target: Target,
}

enum Target {
    Id,

    /// Index of an indexed column in the document map
    Column(usize),

    RowVersion,
}

enum JsonSource {
    Text(String),
    Blob(Vec<u8>),
}

/// Compiles the plan reading rows of `shape` as the document `D`.
pub fn compile_document<D: Document>(shape: &RowShape) -> Result<ReaderPlan<D>> {
    let map = D::Root::document_map();
    let schema = map.schema();
    let ty = std::any::type_name::<D>();

    let id = shape.position(&schema.id.name).ok_or_else(|| {
        Error::invalid_reader(format!(
            "`{ty}` requires its id column `{}`, the result has ({})",
            schema.id.name,
            shape.key()
        ))
    })?;

    let json = shape.position(JSON_COLUMN);
    let blob = shape.position(JSON_BLOB_COLUMN);

    let type_column = match &schema.type_column {
        Some(name) => {
            let position = shape.position(name).ok_or_else(|| {
                Error::invalid_reader(format!(
                    "`{ty}` requires its type column `{name}`, the result has ({})",
                    shape.key()
                ))
            })?;

            if let Some(json_position) = json.into_iter().chain(blob).find(|p| *p < position) {
                return Err(Error::invalid_reader(format!(
                    "type column `{name}` of `{ty}` must come before `{}`; \
                     select the type column first",
                    shape.name(json_position)
                )));
            }

            Some(position)
        }
        None => None,
    };

    for required in schema.json.required_columns() {
        if shape.position(required).is_none() {
            return Err(Error::invalid_reader(format!(
                "`{ty}` stores its state as {:?} and requires column `{required}`, \
                 the result has ({}); select fewer columns into a record or tuple type instead",
                schema.json,
                shape.key()
            )));
        }
    }

    let mut assignments = vec![Assignment {
        position: id,
        target: Target::Id,
    }];

    for (position, name) in shape.names().enumerate() {
        if position == id || Some(position) == type_column || is_json_column(name) {
            continue;
        }

        let target = if schema.is_row_version(name) && map.row_version().is_some() {
            Target::RowVersion
        } else if let Some(index) = map
            .column_index(name)
            .filter(|index| schema.columns[*index].direction.reads())
        {
            Target::Column(index)
        } else {
            trace!(ty, column = name, "ignoring unmapped column");
            continue;
        };

        assignments.push(Assignment { position, target });
    }

    let plan = DocumentPlan {
        id,
        type_column,
        variants: variants_of::<D::Root>(),
        json: json.filter(|_| schema.json.has_text()),
        blob: blob.filter(|_| schema.json.has_blob()),
        assignments,
        columns: shape.names().map(str::to_string).collect(),
    };

    Ok(ReaderPlan::new(move |cx, row, record| {
        plan.read::<D>(cx, row, record)
    }))
}

impl DocumentPlan {
    fn read<D: Document>(
        &self,
        cx: &ReadContext,
        row: usize,
        mut record: ValueRecord,
    ) -> Result<Option<D>> {
        let map = D::Root::document_map();
        let schema = map.schema();

        let variant = match self.type_column {
            Some(position) => {
                let value = record.take(position);
                cx.resolver(schema.name)
                    .resolve_from_value(&self.variants, &value)
                    .ok_or_else(|| {
                        Error::unresolved_type(schema.name, describe(&value))
                            .context(self.row_error(row, position))
                    })?
            }
            None => TypeKey(schema.name),
        };

        if variant.is_hidden() || !D::accepts(variant) {
            trace!(
                row,
                variant = variant.name(),
                ty = std::any::type_name::<D>(),
                "excluding row"
            );
            return Ok(None);
        }

        let mut doc = self.instantiate::<D::Root>(cx, row, variant, &mut record)?;

        for assignment in &self.assignments {
            let value = record.take(assignment.position);
            let res = match assignment.target {
                Target::Id => map.id().assign(&mut doc, value),
                Target::RowVersion => match map.row_version() {
                    Some(accessor) => accessor.assign(&mut doc, value),
                    None => Ok(()),
                },
                Target::Column(index) => match map.accessor(index) {
                    Some((column, accessor)) if column.applies_to(variant) => {
                        accessor.assign(&mut doc, value)
                    }
                    _ => Ok(()),
                },
            };

            res.map_err(|err| err.context(self.row_error(row, assignment.position)))?;
        }

        Ok(D::from_root(doc))
    }

    /// Builds the document from its JSON state, or activates an empty one
    /// when the row carries none.
    fn instantiate<R: DocumentRoot>(
        &self,
        cx: &ReadContext,
        row: usize,
        variant: TypeKey,
        record: &mut ValueRecord,
    ) -> Result<R> {
        let schema = R::document_map().schema();

        let text = self.json.map(|p| (p, record.take(p)));
        let blob = self.blob.map(|p| (p, record.take(p)));

        let Some((position, source)) = pick_source(schema.json, text, blob) else {
            return R::activate(variant)
                .map_err(|err| err.context(self.row_error(row, self.id)));
        };

        let json = match source {
            Some(source) => self.deserialize(cx, schema, source),
            None => Err(Error::invalid_result(format!(
                "`{}` holds neither text nor bytes",
                self.columns[position]
            ))),
        };

        json.and_then(|json| R::from_json(variant, json))
            .map_err(|err| err.context(self.row_error(row, position)))
    }

    fn deserialize(
        &self,
        cx: &ReadContext,
        schema: &DocumentSchema,
        source: JsonSource,
    ) -> Result<serde_json::Value> {
        let serializer = cx.serializer();

        match source {
            JsonSource::Text(text) => {
                let json = if schema.prefers_streaming() {
                    serializer.deserialize_large_text(&mut text.as_bytes())
                } else {
                    serializer.deserialize_small_text(&text)
                };

                if reaches(&text, cx.large_document_threshold()) && schema.mark_streaming() {
                    debug!(
                        document = schema.name,
                        len = text.len(),
                        "switching to streaming JSON reads"
                    );
                }

                json
            }
            JsonSource::Blob(bytes) => serializer.deserialize_compressed(&mut &bytes[..]),
        }
    }

    fn row_error(&self, row: usize, position: usize) -> Error {
        let column = self
            .columns
            .get(position)
            .map(String::as_str)
            .unwrap_or("?");
        Error::row_materialization(row, position, column)
    }
}

/// `true` when `text` holds at least `threshold` characters. The byte length
/// bounds the character count, so most texts are never scanned.
fn reaches(text: &str, threshold: usize) -> bool {
    text.len() >= threshold && text.chars().count() >= threshold
}

/// Chooses the JSON column of a row. The non-null column wins; when both
/// hold a value the format's preference decides. `None` when the row has no
/// JSON state. The inner `None` marks a value that is neither text nor
/// bytes.
fn pick_source(
    format: JsonFormat,
    text: Option<(usize, Value)>,
    blob: Option<(usize, Value)>,
) -> Option<(usize, Option<JsonSource>)> {
    let text = text.filter(|(_, value)| !value.is_null());
    let blob = blob.filter(|(_, value)| !value.is_null());

    let (position, value) = match (text, blob) {
        (Some(text), Some(blob)) => {
            if format.prefers_text() {
                text
            } else {
                blob
            }
        }
        (Some(text), None) => text,
        (None, Some(blob)) => blob,
        (None, None) => return None,
    };

    let source = match value {
        Value::String(text) => Some(JsonSource::Text(text)),
        Value::Bytes(bytes) => Some(JsonSource::Blob(bytes)),
        _ => None,
    };

    Some((position, source))
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "NULL".into(),
        other => format!("{other:?}"),
    }
}
