//! Statement AST and predicate expressions.
//!
//! Every node is an immutable value. SQL text is produced by `tabula-sql`;
//! nothing here renders itself.

mod columns;
pub use columns::{Aggregate, Columns, RowNumber, SelectColumn};

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod expr_call;
pub use expr_call::ExprCall;

mod expr_check;
pub use expr_check::{ExprInList, ExprIsNull};

mod expr_compare;
pub use expr_compare::{BinaryOp, ExprBinaryOp};

mod expr_field;
pub use expr_field::ExprField;

mod expr_logic;
pub use expr_logic::{ExprAnd, ExprNot, ExprOr};

mod expr_pattern;
pub use expr_pattern::{ExprPattern, PatternKind};

mod field;
pub use field::{Field, FieldColumn, FieldJson};

mod group_by;
pub use group_by::GroupBy;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind, JoinOn};

mod operand;
pub use operand::Operand;

mod order_by;
pub use order_by::{Direction, OrderBy, OrderByField};

mod parameter;
pub use parameter::Parameter;

mod query;
pub use query::Query;

mod routine;
pub use routine::{CreateFunction, CreateProcedure, CreateView};

mod row_selection;
pub use row_selection::RowSelection;

mod select;
pub use select::{QueryOption, Select};

mod source;
pub use source::{validate_alias, Source};

mod source_joined;
pub use source_joined::SourceJoined;

mod source_subquery;
pub use source_subquery::SourceSubquery;

mod source_table;
pub use source_table::SourceTable;

mod sql_type;
pub use sql_type::{Length, SqlType};

mod statement;
pub use statement::Statement;

mod union;
pub use union::Union;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

mod value_enum;
pub use value_enum::ValueEnum;

mod value_record;
pub use value_record::ValueRecord;

mod where_clause;
pub use where_clause::{
    Where, WhereAnd, WhereArray, WhereBinary, WhereInSubquery, WhereIsNull, WhereUnary,
};
