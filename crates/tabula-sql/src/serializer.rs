#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::{Ident, Literal, QualifiedName};

// Fragment serializers
mod field;
mod routine;
mod select;
mod source;
mod statement;
mod ty;
mod value;
mod where_clause;

use tabula_core::stmt;

/// Serialize a statement to SQL Server flavoured SQL text.
///
/// Serialization is pure: the same statement always yields the same text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serialize(&self, stmt: &stmt::Statement) -> String {
        render(stmt)
    }
}

fn render(node: impl ToSql) -> String {
    let mut ret = String::new();
    node.to_sql(&mut Formatter { dst: &mut ret });
    ret
}

impl Formatter<'_> {
    /// Writes `node` rendered on its own, with every line indented by four
    /// spaces.
    fn indented(&mut self, node: impl ToSql) {
        let inner = render(node);
        let mut s = "";
        for line in inner.lines() {
            self.dst.push_str(s);
            if !line.is_empty() {
                self.dst.push_str("    ");
                self.dst.push_str(line);
            }
            s = "\n";
        }
    }
}

/// Renders an AST node to its SQL text fragment.
pub trait GenerateSql {
    fn generate_sql(&self) -> String;
}

macro_rules! impl_generate_sql {
    ($($t:ty),* $(,)?) => {
        $(
            impl GenerateSql for $t {
                fn generate_sql(&self) -> String {
                    render(self)
                }
            }
        )*
    };
}

impl_generate_sql!(
    stmt::Columns,
    stmt::CreateFunction,
    stmt::CreateProcedure,
    stmt::CreateView,
    stmt::Delete,
    stmt::Field,
    stmt::GroupBy,
    stmt::Insert,
    stmt::Join,
    stmt::OrderBy,
    stmt::Parameter,
    stmt::Query,
    stmt::Select,
    stmt::Source,
    stmt::SourceJoined,
    stmt::SourceSubquery,
    stmt::SourceTable,
    stmt::SqlType,
    stmt::Statement,
    stmt::Union,
    stmt::Update,
    stmt::Where,
);
