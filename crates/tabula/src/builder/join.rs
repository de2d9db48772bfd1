use super::{
    state::{resolve_in, State},
    SelectBuilder, TableSource,
};
use crate::Result;

use tabula_core::stmt::{Join, JoinKind, JoinOn};

/// A join being configured.
///
/// ON clauses are collected until the next join starts or [`select`] is
/// called; only then is the clause count checked against the join kind.
///
/// [`select`]: JoinBuilder::select
#[derive(Debug)]
pub struct JoinBuilder {
    state: State,
    pending: Join,
}

/// Starts a join of `table` onto the sources in `state`. Both sides get a
/// generated alias when they have none.
pub(super) fn start(mut state: State, kind: JoinKind, table: &TableSource) -> JoinBuilder {
    state.ensure_root_alias();

    let mut source = table.table().clone();
    if source.alias.is_none() {
        source.alias = Some(state.generate_alias());
    }

    JoinBuilder {
        state,
        pending: Join::new(kind, source, vec![]),
    }
}

impl JoinBuilder {
    /// Adds `left = right`. `left` is resolved against the sources joined so
    /// far, `right` against the table being joined. Either side may be
    /// written as `alias.Column`.
    pub fn on(mut self, left: &str, right: &str) -> Result<JoinBuilder> {
        let left = self.state.resolve(left)?;

        let source = &self.pending.source;
        let right = match (right.split_once('.'), source.alias()) {
            (Some((prefix, column)), Some(alias)) if prefix.eq_ignore_ascii_case(alias) => {
                resolve_in(source, column)?
            }
            _ => resolve_in(source, right)?,
        };

        self.pending.on.push(JoinOn::eq(left, right));
        Ok(self)
    }

    /// Adds a prebuilt condition.
    pub fn on_clause(mut self, on: JoinOn) -> JoinBuilder {
        self.pending.on.push(on);
        self
    }

    pub fn inner_join(self, table: &TableSource) -> Result<JoinBuilder> {
        self.next(JoinKind::Inner, table)
    }

    pub fn left_join(self, table: &TableSource) -> Result<JoinBuilder> {
        self.next(JoinKind::Left, table)
    }

    pub fn left_hash_join(self, table: &TableSource) -> Result<JoinBuilder> {
        self.next(JoinKind::LeftHash, table)
    }

    pub fn cross_join(self, table: &TableSource) -> Result<JoinBuilder> {
        self.next(JoinKind::Cross, table)
    }

    /// Ends the join chain.
    pub fn select(self) -> Result<SelectBuilder> {
        Ok(SelectBuilder::from_state(self.complete()?))
    }

    fn next(self, kind: JoinKind, table: &TableSource) -> Result<JoinBuilder> {
        Ok(start(self.complete()?, kind, table))
    }

    fn complete(mut self) -> Result<State> {
        self.pending.validate()?;
        self.state.joins.push(self.pending);
        Ok(self.state)
    }
}
