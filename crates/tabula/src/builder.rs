//! Fluent construction of statements over tables, joins, unions and
//! subqueries.
//!
//! Builder methods never modify the builder they are called on; each returns
//! a new builder. Once a terminal method ran on a builder, every further
//! call on it fails with a "builder already finished" error.

mod join;
pub use join::JoinBuilder;

mod select;
pub use select::SelectBuilder;

mod state;

mod table;
pub use table::TableSource;

use tabula_core::{driver::Command, stmt::Statement};
use tabula_sql::{ParameterSet, Serializer};

/// A finished statement together with its parameter values.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub statement: Statement,
    pub params: ParameterSet,
}

impl Prepared {
    pub fn sql(&self) -> String {
        Serializer::new().serialize(&self.statement)
    }

    pub fn command(&self) -> Command {
        tabula_sql::assemble(&self.statement, &self.params)
    }
}
