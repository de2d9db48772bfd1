pub mod builder;
pub use builder::{JoinBuilder, Prepared, SelectBuilder, TableSource};

pub mod cursor;
pub use cursor::Cursor;

pub mod db;
pub use db::{Db, Query};

pub mod document;
pub use document::{Column, Document, DocumentMap, DocumentMapBuilder, DocumentRoot};

mod json;
pub use json::JsonSerializer;

pub mod reader;
pub use reader::{Load, ReadContext, ReaderPlan, Record};

pub mod stmt;

mod translate;

pub mod writer;
pub use writer::DocumentWriter;

pub use tabula_core::{
    async_trait, bail, driver, err,
    resolve::{DefaultTypeResolver, InstanceTypeResolver, PropertyHandler, TypeKey},
    schema,
    schema::{
        ColumnDirection, ColumnNameResolver, JsonFormat, KeyStrategy, RelatedDocument,
        StaticColumnNames, TableName,
    },
    Connection, DocumentSerializer, Error, Result,
};

pub use tabula_sql::ParameterSet;
