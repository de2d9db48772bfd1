use crate::{Error, Result};

use indexmap::IndexMap;
use tabula_core::{
    schema::{is_json_column, JSON_COLUMN},
    stmt::{
        Columns, Field, FieldColumn, GroupBy, Join, OrderBy, OrderByField, Query, QueryOption,
        RowSelection, Select, Source, SourceJoined, SourceSubquery, SourceTable, Union, Where,
    },
};
use tabula_sql::ParameterSet;

/// Everything a builder has accumulated.
#[derive(Debug, Clone)]
pub(super) struct State {
    pub(super) root: Source,
    pub(super) joins: Vec<Join>,

    /// Set when the root is a union, which is emitted as-is while nothing is
    /// layered on top of it
    pub(super) union: Option<Union>,
    pub(super) alias_overridden: bool,

    pub(super) row_selection: RowSelection,
    pub(super) columns: Columns,
    pub(super) filter: Vec<Where>,
    pub(super) group_by: Vec<Field>,
    pub(super) order_by: Vec<OrderByField>,
    pub(super) row_number: Option<(Vec<Field>, String)>,
    pub(super) options: Vec<QueryOption>,

    pub(super) params: ParameterSet,

    /// Suffix of the next generated alias
    pub(super) next_alias: usize,
}

impl State {
    pub(super) fn new(root: impl Into<Source>) -> Self {
        Self {
            root: root.into(),
            joins: vec![],
            union: None,
            alias_overridden: false,
            row_selection: RowSelection::default(),
            columns: Columns::All,
            filter: vec![],
            group_by: vec![],
            order_by: vec![],
            row_number: None,
            options: vec![],
            params: ParameterSet::new(),
            next_alias: 0,
        }
    }

    /// A state selecting from `query`, carrying over parameters and the alias
    /// counter.
    pub(super) fn wrap(&mut self, query: impl Into<Query>) -> State {
        let alias = self.generate_alias();
        let mut state = State::new(SourceSubquery::new(query, alias));
        state.params = self.params.clone();
        state.next_alias = self.next_alias;
        state
    }

    pub(super) fn generate_alias(&mut self) -> String {
        let alias = format!("t{}", self.next_alias);
        self.next_alias += 1;
        alias
    }

    /// Gives the root table an alias if it has none, so joined tables can be
    /// told apart.
    pub(super) fn ensure_root_alias(&mut self) {
        if self.root.alias().is_some() {
            return;
        }
        let alias = self.generate_alias();
        if let Source::Table(table) = &mut self.root {
            table.alias = Some(alias);
        }
    }

    /// Resolves a field name.
    ///
    /// `alias.Column` addresses a column of the source with that alias. Any
    /// other name is looked up on the root source: a real column wins, then a
    /// path into the `JSON` column.
    pub(super) fn resolve(&self, name: &str) -> Result<Field> {
        if let Some((prefix, column)) = name.split_once('.') {
            let aliased = std::iter::once(&self.root)
                .chain(self.joins.iter().map(|join| &join.source))
                .find(|source| {
                    source
                        .alias()
                        .is_some_and(|alias| alias.eq_ignore_ascii_case(prefix))
                });

            if let Some(source) = aliased {
                return resolve_in(source, column);
            }
        }

        resolve_in(&self.root, name)
    }

    /// `true` when nothing is layered on top of a union root.
    fn is_plain(&self) -> bool {
        !self.alias_overridden
            && self.joins.is_empty()
            && self.row_selection.is_empty()
            && self.columns == Columns::All
            && self.filter.is_empty()
            && self.group_by.is_empty()
            && self.order_by.is_empty()
            && self.row_number.is_none()
            && self.options.is_empty()
    }

    /// The union to extend when uniting this state with another query.
    pub(super) fn plain_union(&self) -> Option<&Union> {
        self.union.as_ref().filter(|_| self.is_plain())
    }

    pub(super) fn query(&self) -> Result<Query> {
        match self.plain_union() {
            Some(union) => Ok(union.clone().into()),
            None => Ok(self.select()?.into()),
        }
    }

    pub(super) fn select(&self) -> Result<Select> {
        let source = if self.joins.is_empty() {
            self.root.clone()
        } else {
            SourceJoined::new(self.root.clone(), self.joins.clone())?.into()
        };

        let mut select = Select::new(source);
        select.row_selection = self.row_selection;
        select.columns = self.columns();
        select.filter = Where::and(self.filter.iter().cloned());
        select.options = self.options.clone();

        if !self.group_by.is_empty() {
            select.group_by = Some(GroupBy::new(self.group_by.clone())?);
        }

        if !self.order_by.is_empty() {
            select.order_by = Some(OrderBy::new(self.order_by.clone())?);
        }

        if let Some((partition_by, alias)) = &self.row_number {
            select = select.with_row_number(partition_by.clone(), None, alias)?;
        }

        Ok(select)
    }

    /// The explicit selection, or the default one: `*`, unless the table's
    /// JSON columns are not last, in which case every column is listed with
    /// the JSON columns moved to the end.
    fn columns(&self) -> Columns {
        match (&self.columns, &self.root) {
            (Columns::All, Source::Table(table)) if self.joins.is_empty() => json_last(table),
            (columns, _) => columns.clone(),
        }
    }

    /// Binds the parameters of `other` into this state. Names already bound
    /// to a different value are renamed everywhere in `selects`, including
    /// subquery sources, joined sources and `IN (SELECT ...)` clauses.
    ///
    /// Hand-written SQL cannot be rewritten, so a renamed parameter that
    /// appears in a custom clause is an error.
    pub(super) fn merge_params(
        &mut self,
        other: &ParameterSet,
        selects: &mut [Select],
    ) -> Result<()> {
        let mut renamed = IndexMap::new();

        for (name, value) in other.iter() {
            match self.params.get(name) {
                Some(existing) if existing == value => continue,
                Some(_) => {}
                None => {
                    self.params.insert(name, value.clone())?;
                    continue;
                }
            }

            let fresh = self.params.add(name.trim_start_matches('@'), value.clone());
            renamed.insert(name.to_string(), fresh);
        }

        if renamed.is_empty() {
            return Ok(());
        }

        let renames = Renames(&renamed);
        selects
            .iter_mut()
            .try_for_each(|select| renames.select(select))
    }
}

pub(super) fn resolve_in(source: &Source, name: &str) -> Result<Field> {
    let alias = source.alias().map(str::to_string);

    let field = match source {
        Source::Table(table) if !table.columns.is_empty() => {
            if let Some(column) = table.column(name) {
                Field::column(column)?
            } else if let Some(json) = table.column(JSON_COLUMN) {
                Field::json(json, name)?
            } else {
                return Err(Error::invalid_statement(format!(
                    "`{name}` is not a column of [{}].[{}], which has no JSON column to \
                     search instead",
                    table.schema, table.table
                )));
            }
        }
        Source::Joined(joined) => return resolve_in(&joined.root, name),
        _ => Field::column(name)?,
    };

    Ok(match alias {
        Some(alias) => field.qualify(alias),
        None => field,
    })
}

fn json_last(table: &SourceTable) -> Columns {
    let trailing = table
        .columns
        .iter()
        .rev()
        .take_while(|column| is_json_column(column))
        .count();
    let total = table
        .columns
        .iter()
        .filter(|column| is_json_column(column))
        .count();

    if trailing == total {
        return Columns::All;
    }

    let (json, other): (Vec<_>, Vec<_>) = table
        .columns
        .iter()
        .partition(|column| is_json_column(column));

    Columns::fields(other.into_iter().chain(json).map(|name| {
        Field::Column(FieldColumn {
            table: table.alias.clone(),
            name: name.clone(),
        })
    }))
}

/// Rewrites parameter names through a statement tree.
struct Renames<'a>(&'a IndexMap<String, String>);

impl Renames<'_> {
    fn query(&self, query: &mut Query) -> Result<()> {
        match query {
            Query::Select(select) => self.select(select),
            Query::Union(union) => union
                .operands
                .iter_mut()
                .try_for_each(|select| self.select(select)),
        }
    }

    fn select(&self, select: &mut Select) -> Result<()> {
        self.source(&mut select.source)?;
        match &mut select.filter {
            Some(filter) => self.clause(filter),
            None => Ok(()),
        }
    }

    fn source(&self, source: &mut Source) -> Result<()> {
        match source {
            Source::Table(_) => Ok(()),
            Source::Subquery(subquery) => self.query(&mut subquery.query),
            Source::Joined(joined) => {
                self.source(&mut joined.root)?;
                joined
                    .joins
                    .iter_mut()
                    .try_for_each(|join| self.source(&mut join.source))
            }
        }
    }

    fn clause(&self, clause: &mut Where) -> Result<()> {
        match clause {
            Where::Unary(unary) => self.param(&mut unary.param),
            Where::Binary(binary) => {
                self.param(&mut binary.low);
                self.param(&mut binary.high);
            }
            Where::Array(array) => array.params.iter_mut().for_each(|param| self.param(param)),
            Where::And(and) => {
                return and
                    .clauses
                    .iter_mut()
                    .try_for_each(|clause| self.clause(clause))
            }
            Where::InSubquery(subquery) => return self.select(&mut subquery.select),
            Where::Custom(sql) => {
                if let Some(name) = self.0.keys().find(|name| mentions_param(sql, name)) {
                    return Err(Error::invalid_statement(format!(
                        "parameter `{name}` is bound to different values on both sides of the \
                         union and is referenced by hand-written SQL `{sql}`, which cannot be \
                         renamed; give it a distinct name"
                    )));
                }
            }
            Where::IsNull(_) => {}
        }
        Ok(())
    }

    fn param(&self, param: &mut String) {
        if let Some(fresh) = self.0.get(param.as_str()) {
            *param = fresh.clone();
        }
    }
}

/// `true` when `sql` references `param` as a whole name, so `@int` does not
/// match inside `@int_0`.
fn mentions_param(sql: &str, param: &str) -> bool {
    sql.match_indices(param).any(|(at, _)| {
        !sql[at + param.len()..]
            .starts_with(|c: char| c.is_alphanumeric() || c == '_' || c == '@')
    })
}
