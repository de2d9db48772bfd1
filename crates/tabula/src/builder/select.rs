use super::{
    join::{self, JoinBuilder},
    state::State,
    Prepared, TableSource,
};
use crate::{translate::Translate, Error, Result};

use std::sync::atomic::{AtomicBool, Ordering};
use tabula_core::{
    driver::Command,
    schema::RelatedDocument,
    stmt::{
        self, Aggregate, Columns, Delete, Field, JoinKind, Operand, OrderByField, PatternKind,
        Query, QueryOption, Select, SelectColumn, Source, SourceTable, Statement, Union, Value,
        Where,
    },
};

/// Accumulates a `SELECT` over a table, a subquery, a join or a union.
///
/// Every method returns a new builder and leaves `self` untouched, so a base
/// query can be branched into several derived ones. Terminal methods
/// (`build`, `build_count`, `build_delete`, `to_command`) finish the builder
/// they are called on; any later call on that instance fails.
#[derive(Debug)]
pub struct SelectBuilder {
    state: State,
    finished: AtomicBool,
}

impl SelectBuilder {
    pub(crate) fn from_table(table: SourceTable) -> Self {
        Self::from_state(State::new(table))
    }

    pub(super) fn from_state(state: State) -> Self {
        Self {
            state,
            finished: AtomicBool::new(false),
        }
    }

    /// Adds a column to the selection.
    pub fn column(&self, name: &str) -> Result<SelectBuilder> {
        self.derive("column", |state| {
            let field = state.resolve(name)?;
            push_column(state, SelectColumn::Field { field, alias: None });
            Ok(())
        })
    }

    pub fn columns<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<SelectBuilder> {
        self.derive("columns", |state| {
            for name in names {
                let field = state.resolve(name)?;
                push_column(state, SelectColumn::Field { field, alias: None });
            }
            Ok(())
        })
    }

    /// Adds `func(field)` to the selection, `func(*)` when `field` is `None`.
    pub fn aggregate(
        &self,
        func: Aggregate,
        field: Option<&str>,
        alias: Option<&str>,
    ) -> Result<SelectBuilder> {
        self.derive("aggregate", |state| {
            let field = field.map(|name| state.resolve(name)).transpose()?;
            push_column(
                state,
                SelectColumn::Aggregate {
                    func,
                    field,
                    alias: alias.map(str::to_string),
                },
            );
            Ok(())
        })
    }

    /// Layers a prebuilt clause. Its parameters are bound with
    /// [`SelectBuilder::parameter`].
    pub fn where_clause(&self, clause: Where) -> Result<SelectBuilder> {
        self.derive("where_clause", |state| {
            state.filter.push(clause);
            Ok(())
        })
    }

    /// Layers hand-written SQL.
    pub fn where_sql(&self, sql: &str) -> Result<SelectBuilder> {
        self.derive("where_sql", |state| {
            state.filter.push(Where::custom(sql));
            Ok(())
        })
    }

    /// Layers `field operand value`.
    ///
    /// `In` and `NotIn` take a list value, `Between` a list of exactly two
    /// values. Pattern operands wrap the value in `%` wildcards.
    pub fn where_field(
        &self,
        name: &str,
        operand: Operand,
        value: impl Into<Value>,
    ) -> Result<SelectBuilder> {
        let value = value.into();

        self.derive("where_field", |state| {
            let field = state.resolve(name)?;
            let logical = field.logical_name().to_string();

            let clause = match operand {
                Operand::In | Operand::NotIn => match value {
                    Value::List(values) => {
                        in_list(state, field, values, operand == Operand::NotIn)?
                    }
                    other => {
                        return Err(Error::invalid_statement(format!(
                            "{operand} on `{name}` requires a list, got {}",
                            other.kind_name()
                        )))
                    }
                },
                Operand::Between => match value {
                    Value::List(values) if values.len() == 2 => {
                        let mut values = values.into_iter();
                        let low = values.next().unwrap_or_default();
                        let high = values.next().unwrap_or_default();
                        let low = state.params.add(&logical, low);
                        let high = state.params.add(&logical, high);
                        Where::between(field, low, high)?
                    }
                    other => {
                        return Err(Error::invalid_statement(format!(
                            "BETWEEN on `{name}` requires a list of two values, got {}",
                            other.kind_name()
                        )))
                    }
                },
                operand => {
                    let value = match pattern_kind(operand) {
                        Some(kind) => match value.as_str() {
                            Some(text) => Value::from(kind.wrap(text)),
                            None => {
                                return Err(Error::invalid_statement(format!(
                                    "{operand} on `{name}` requires a string, got {}",
                                    value.kind_name()
                                )))
                            }
                        },
                        None => value,
                    };
                    let param = state.params.add(&logical, value);
                    Where::unary(field, operand, param)?
                }
            };

            state.filter.push(clause);
            Ok(())
        })
    }

    /// Layers `field IN (...)`. An empty list matches nothing.
    pub fn where_in<V: Into<Value>>(
        &self,
        name: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Result<SelectBuilder> {
        let values = values.into_iter().map(Into::into).collect();
        self.derive("where_in", |state| {
            let field = state.resolve(name)?;
            let clause = in_list(state, field, values, false)?;
            state.filter.push(clause);
            Ok(())
        })
    }

    /// Layers `field NOT IN (...)`. An empty list matches everything.
    pub fn where_not_in<V: Into<Value>>(
        &self,
        name: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Result<SelectBuilder> {
        let values = values.into_iter().map(Into::into).collect();
        self.derive("where_not_in", |state| {
            let field = state.resolve(name)?;
            let clause = in_list(state, field, values, true)?;
            state.filter.push(clause);
            Ok(())
        })
    }

    pub fn where_null(&self, name: &str) -> Result<SelectBuilder> {
        self.derive("where_null", |state| {
            let field = state.resolve(name)?;
            state.filter.push(Where::is_null(field));
            Ok(())
        })
    }

    pub fn where_not_null(&self, name: &str) -> Result<SelectBuilder> {
        self.derive("where_not_null", |state| {
            let field = state.resolve(name)?;
            state.filter.push(Where::is_not_null(field));
            Ok(())
        })
    }

    /// Restricts `id_column` to the documents linked to `parent` through the
    /// link table of `related`.
    pub fn where_related(
        &self,
        related: &RelatedDocument,
        id_column: &str,
        parent: impl Into<Value>,
    ) -> Result<SelectBuilder> {
        let parent = parent.into();

        self.derive("where_related", |state| {
            let field = state.resolve(id_column)?;
            let link = SourceTable::new(
                &related.link_table.schema,
                &related.link_table.name,
                vec![related.parent_column.clone(), related.child_column.clone()],
            );

            let mut select = Select::new(link);
            select.columns = Columns::fields([Field::column(&related.child_column)?]);

            let param = state.params.add(&related.parent_column, parent);
            select.and_where(Where::unary(
                Field::column(&related.parent_column)?,
                Operand::Equal,
                param,
            )?);

            state.filter.push(Where::in_subquery(field, select));
            Ok(())
        })
    }

    /// Layers a typed predicate, see [`crate::stmt::Expr`].
    pub fn where_expr(&self, expr: &stmt::Expr) -> Result<SelectBuilder> {
        self.derive("where_expr", |state| {
            let mut params = std::mem::take(&mut state.params);
            let resolve = |name: &str| state.resolve(name);
            let clause = Translate::new(&resolve, &mut params).translate(expr);

            state.params = params;
            state.filter.push(clause?);
            Ok(())
        })
    }

    pub fn order_by(&self, name: &str) -> Result<SelectBuilder> {
        self.derive("order_by", |state| {
            let field = state.resolve(name)?;
            state.order_by.push(OrderByField::asc(field));
            Ok(())
        })
    }

    pub fn order_by_desc(&self, name: &str) -> Result<SelectBuilder> {
        self.derive("order_by_desc", |state| {
            let field = state.resolve(name)?;
            state.order_by.push(OrderByField::desc(field));
            Ok(())
        })
    }

    pub fn group_by(&self, name: &str) -> Result<SelectBuilder> {
        self.derive("group_by", |state| {
            let field = state.resolve(name)?;
            state.group_by.push(field);
            Ok(())
        })
    }

    /// `TOP (n)`
    pub fn take(&self, n: u64) -> Result<SelectBuilder> {
        self.derive("take", |state| {
            state.row_selection.top = Some(n);
            Ok(())
        })
    }

    pub fn distinct(&self) -> Result<SelectBuilder> {
        self.derive("distinct", |state| {
            state.row_selection.distinct = true;
            Ok(())
        })
    }

    /// Adds `ROW_NUMBER() OVER (PARTITION BY ... ORDER BY ...)` ordered by the
    /// builder's own ordering, which then no longer applies to the statement.
    pub fn row_number<'a>(
        &self,
        partition_by: impl IntoIterator<Item = &'a str>,
        alias: &str,
    ) -> Result<SelectBuilder> {
        self.derive("row_number", |state| {
            let partition_by = partition_by
                .into_iter()
                .map(|name| state.resolve(name))
                .collect::<Result<_>>()?;
            state.row_number = Some((partition_by, alias.to_string()));
            Ok(())
        })
    }

    pub fn option(&self, option: QueryOption) -> Result<SelectBuilder> {
        self.derive("option", |state| {
            state.options.push(option);
            Ok(())
        })
    }

    /// Binds a value under an explicit name, `@` included.
    pub fn parameter(&self, name: &str, value: impl Into<Value>) -> Result<SelectBuilder> {
        self.derive("parameter", |state| state.params.insert(name, value))
    }

    /// Overrides the alias of the source. The alias must be a plain
    /// identifier.
    pub fn alias(&self, alias: &str) -> Result<SelectBuilder> {
        self.derive("alias", |state| {
            stmt::validate_alias(alias)?;
            match &mut state.root {
                Source::Table(table) => table.alias = Some(alias.to_string()),
                Source::Subquery(subquery) => subquery.alias = alias.to_string(),
                Source::Joined(_) => {
                    return Err(Error::invalid_statement(
                        "a joined source takes the alias of its root table",
                    ))
                }
            }
            state.alias_overridden = true;
            Ok(())
        })
    }

    pub fn inner_join(&self, table: &TableSource) -> Result<JoinBuilder> {
        self.join("inner_join", JoinKind::Inner, table)
    }

    pub fn left_join(&self, table: &TableSource) -> Result<JoinBuilder> {
        self.join("left_join", JoinKind::Left, table)
    }

    pub fn left_hash_join(&self, table: &TableSource) -> Result<JoinBuilder> {
        self.join("left_hash_join", JoinKind::LeftHash, table)
    }

    pub fn cross_join(&self, table: &TableSource) -> Result<JoinBuilder> {
        self.join("cross_join", JoinKind::Cross, table)
    }

    /// `self UNION other`
    pub fn union(&self, other: &SelectBuilder) -> Result<SelectBuilder> {
        self.unite("union", other, false)
    }

    /// `self UNION ALL other`
    pub fn union_all(&self, other: &SelectBuilder) -> Result<SelectBuilder> {
        self.unite("union_all", other, true)
    }

    /// A builder selecting from this query as an aliased subquery.
    pub fn as_subquery(&self) -> Result<SelectBuilder> {
        self.check("as_subquery")?;
        let mut state = self.state.clone();
        let query = state.query()?;
        Ok(Self::from_state(state.wrap(query)))
    }

    /// Finishes the builder into its statement.
    pub fn build(&self) -> Result<Prepared> {
        let state = self.finish("build")?;
        Ok(Prepared {
            statement: Statement::Query(state.query()?),
            params: state.params.clone(),
        })
    }

    /// Finishes the builder into `SELECT COUNT(*)` over the rows it selects.
    pub fn build_count(&self) -> Result<Prepared> {
        self.prepare_count("build_count")
    }

    /// Finishes the builder into a `DELETE` of the rows it selects.
    pub fn build_delete(&self) -> Result<Prepared> {
        self.prepare_delete("build_delete")
    }

    pub fn to_command(&self) -> Result<Command> {
        let state = self.finish("to_command")?;
        Ok(tabula_sql::assemble(
            &Statement::Query(state.query()?),
            &state.params,
        ))
    }

    /// Finishes into a row query, ordered by `default_order` when nothing
    /// else orders it.
    pub(crate) fn prepare_rows(
        &self,
        method: &'static str,
        default_order: &str,
        top: Option<u64>,
    ) -> Result<Prepared> {
        let state = self.finish(method)?;
        let mut state = state.clone();

        if let Some(top) = top {
            state.row_selection.top = Some(top);
        }

        let orderable = state.plain_union().is_none()
            && state.group_by.is_empty()
            && !state.columns.is_aggregate();

        if state.order_by.is_empty() && orderable {
            let field = state.resolve(default_order)?;
            state.order_by.push(OrderByField::asc(field));
        }

        Ok(Prepared {
            statement: Statement::Query(state.query()?),
            params: state.params,
        })
    }

    pub(crate) fn prepare_count(&self, method: &'static str) -> Result<Prepared> {
        let state = self.finish(method)?;
        let mut state = state.clone();

        let direct = state.plain_union().is_none()
            && state.row_selection.is_empty()
            && state.group_by.is_empty()
            && state.row_number.is_none()
            && !state.columns.is_aggregate();

        let mut select = if direct {
            state.order_by.clear();
            state.select()?
        } else {
            let mut inner = state.query()?;
            if let Query::Select(select) = &mut inner {
                if select.row_selection.top.is_none() {
                    select.order_by = None;
                }
            }
            state.wrap(inner).select()?
        };

        select.columns = Columns::Count;

        Ok(Prepared {
            statement: select.into(),
            params: state.params,
        })
    }

    pub(crate) fn prepare_delete(&self, method: &'static str) -> Result<Prepared> {
        let state = self.finish(method)?;

        let table = match &state.root {
            Source::Table(table) if table.alias.is_none() => table.clone(),
            _ => {
                return Err(Error::invalid_statement(
                    "DELETE requires an unaliased table as its source",
                ))
            }
        };

        if !state.joins.is_empty() || state.union.is_some() {
            return Err(Error::invalid_statement(
                "DELETE cannot be built from a join or a union",
            ));
        }

        let delete = Delete {
            table,
            filter: Where::and(state.filter.iter().cloned()),
        };

        Ok(Prepared {
            statement: delete.into(),
            params: state.params.clone(),
        })
    }

    /// Finishes the builder without producing a statement.
    fn finish(&self, method: &'static str) -> Result<&State> {
        if self.finished.swap(true, Ordering::AcqRel) {
            return Err(Error::builder_finished(method));
        }
        Ok(&self.state)
    }

    fn check(&self, method: &'static str) -> Result<()> {
        if self.finished.load(Ordering::Acquire) {
            return Err(Error::builder_finished(method));
        }
        Ok(())
    }

    fn derive(
        &self,
        method: &'static str,
        f: impl FnOnce(&mut State) -> Result<()>,
    ) -> Result<SelectBuilder> {
        self.check(method)?;
        let mut state = self.state.clone();
        f(&mut state)?;
        Ok(Self::from_state(state))
    }

    fn join(
        &self,
        method: &'static str,
        kind: JoinKind,
        table: &TableSource,
    ) -> Result<JoinBuilder> {
        self.check(method)?;
        Ok(join::start(self.state.clone(), kind, table))
    }

    fn unite(
        &self,
        method: &'static str,
        other: &SelectBuilder,
        all: bool,
    ) -> Result<SelectBuilder> {
        self.check(method)?;
        other.check(method)?;

        let mut state = self.state.clone();
        state.next_alias = state.next_alias.max(other.state.next_alias);

        let mut operands = match state.plain_union() {
            Some(union) if union.all == all => union.operands.clone(),
            _ => vec![state.select()?],
        };

        let mut others = match other.state.plain_union() {
            Some(union) if union.all == all => union.operands.clone(),
            _ => vec![other.state.select()?],
        };
        state.merge_params(&other.state.params, &mut others)?;
        operands.extend(others);

        let union = Union::new(operands, all)?;
        let mut next = state.wrap(union.clone());
        next.union = Some(union);

        Ok(Self::from_state(next))
    }
}

fn push_column(state: &mut State, column: SelectColumn) {
    match &mut state.columns {
        Columns::List(columns) => columns.push(column),
        columns => *columns = Columns::List(vec![column]),
    }
}

fn in_list(state: &mut State, field: Field, values: Vec<Value>, negate: bool) -> Result<Where> {
    if values.is_empty() {
        return Ok(Where::custom(if negate { "1 = 1" } else { "1 = 0" }));
    }

    let params = state.params.add_list(field.logical_name(), values);
    let operand = if negate { Operand::NotIn } else { Operand::In };
    Where::array(field, operand, params)
}

fn pattern_kind(operand: Operand) -> Option<PatternKind> {
    match operand {
        Operand::Contains => Some(PatternKind::Contains),
        Operand::StartsWith => Some(PatternKind::StartsWith),
        Operand::EndsWith => Some(PatternKind::EndsWith),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabula_core::schema::{RelatedDocument, TableName};

    fn foo() -> TableSource {
        TableSource::new(TableName::new("dbo", "Foo"), ["Id", "Int", "Name", "JSON"])
    }

    fn sql(builder: &SelectBuilder) -> String {
        builder.build().unwrap().sql()
    }

    fn int_eq(value: i32) -> SelectBuilder {
        foo()
            .select()
            .where_field("Int", Operand::Equal, value)
            .unwrap()
    }

    #[test]
    fn where_field_binds_named_params() {
        let prepared = foo()
            .select()
            .where_field("Int", Operand::GreaterThan, 1)
            .unwrap()
            .where_field("Int", Operand::LessThan, 5)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            prepared.sql(),
            "SELECT * FROM [dbo].[Foo] WHERE ([Int] > @int)\nAND ([Int] < @int_0)"
        );
        assert_eq!(prepared.params.get("@int_0"), Some(&Value::I32(5)));
    }

    #[test]
    fn pattern_operands_wrap_the_value() {
        let prepared = foo()
            .select()
            .where_field("Name", Operand::StartsWith, "ab")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(prepared.params.get("@name"), Some(&Value::from("ab%")));
    }

    #[test]
    fn empty_in_matches_nothing() {
        let builder = foo().select().where_in("Id", Vec::<i32>::new()).unwrap();
        assert_eq!(sql(&builder), "SELECT * FROM [dbo].[Foo] WHERE (1 = 0)");
    }

    #[test]
    fn methods_leave_the_original_untouched() {
        let base = int_eq(1);
        let a = base.order_by("Name").unwrap();
        let b = base.take(3).unwrap();

        assert!(!sql(&a).contains("TOP"));
        assert!(!sql(&b).contains("ORDER BY"));
        assert_eq!(sql(&base), "SELECT * FROM [dbo].[Foo] WHERE ([Int] = @int)");
    }

    #[test]
    fn finished_builder_rejects_further_calls() {
        let builder = foo().select();
        builder.build().unwrap();

        let err = builder.order_by("Int").unwrap_err();
        assert!(err.is_builder_finished());
        assert!(err.to_string().contains("`order_by`"));

        assert!(builder.build().unwrap_err().is_builder_finished());
        let err = builder.inner_join(&foo()).unwrap_err();
        assert!(err.is_builder_finished());
    }

    type Call = (&'static str, fn(&SelectBuilder) -> Result<()>);

    fn tags() -> RelatedDocument {
        RelatedDocument::new("Tags", TableName::new("dbo", "FooTags"), "FooId", "TagId")
    }

    #[test]
    fn every_method_fails_after_every_terminal() {
        let terminals: &[Call] = &[
            ("build", |b: &SelectBuilder| b.build().map(drop)),
            ("build_count", |b: &SelectBuilder| b.build_count().map(drop)),
            ("build_delete", |b: &SelectBuilder| b.build_delete().map(drop)),
            ("to_command", |b: &SelectBuilder| b.to_command().map(drop)),
        ];

        let methods: &[Call] = &[
            ("column", |b: &SelectBuilder| b.column("Int").map(drop)),
            ("columns", |b: &SelectBuilder| b.columns(["Id", "Int"]).map(drop)),
            ("aggregate", |b: &SelectBuilder| {
                b.aggregate(Aggregate::Count, None, Some("Total")).map(drop)
            }),
            ("where_clause", |b: &SelectBuilder| {
                b.where_clause(Where::custom("1 = 1")).map(drop)
            }),
            ("where_sql", |b: &SelectBuilder| b.where_sql("1 = 1").map(drop)),
            ("where_field", |b: &SelectBuilder| {
                b.where_field("Int", Operand::Equal, 1).map(drop)
            }),
            ("where_in", |b: &SelectBuilder| b.where_in("Int", [1, 2]).map(drop)),
            ("where_not_in", |b: &SelectBuilder| {
                b.where_not_in("Int", [1, 2]).map(drop)
            }),
            ("where_null", |b: &SelectBuilder| b.where_null("Name").map(drop)),
            ("where_not_null", |b: &SelectBuilder| {
                b.where_not_null("Name").map(drop)
            }),
            ("where_related", |b: &SelectBuilder| {
                b.where_related(&tags(), "Id", 1).map(drop)
            }),
            ("where_expr", |b: &SelectBuilder| {
                b.where_expr(&stmt::Expr::eq(stmt::Expr::field("Int"), 1))
                    .map(drop)
            }),
            ("order_by", |b: &SelectBuilder| b.order_by("Int").map(drop)),
            ("order_by_desc", |b: &SelectBuilder| b.order_by_desc("Int").map(drop)),
            ("group_by", |b: &SelectBuilder| b.group_by("Int").map(drop)),
            ("take", |b: &SelectBuilder| b.take(1).map(drop)),
            ("distinct", |b: &SelectBuilder| b.distinct().map(drop)),
            ("row_number", |b: &SelectBuilder| b.row_number(["Int"], "Rank").map(drop)),
            ("option", |b: &SelectBuilder| b.option(QueryOption::Recompile).map(drop)),
            ("parameter", |b: &SelectBuilder| b.parameter("@extra", 1).map(drop)),
            ("alias", |b: &SelectBuilder| b.alias("f").map(drop)),
            ("inner_join", |b: &SelectBuilder| b.inner_join(&foo()).map(drop)),
            ("left_join", |b: &SelectBuilder| b.left_join(&foo()).map(drop)),
            ("left_hash_join", |b: &SelectBuilder| b.left_hash_join(&foo()).map(drop)),
            ("cross_join", |b: &SelectBuilder| b.cross_join(&foo()).map(drop)),
            ("union", |b: &SelectBuilder| b.union(&foo().select()).map(drop)),
            ("union_all", |b: &SelectBuilder| b.union_all(&foo().select()).map(drop)),
            ("as_subquery", |b: &SelectBuilder| b.as_subquery().map(drop)),
            ("build", |b: &SelectBuilder| b.build().map(drop)),
            ("build_count", |b: &SelectBuilder| b.build_count().map(drop)),
            ("build_delete", |b: &SelectBuilder| b.build_delete().map(drop)),
            ("to_command", |b: &SelectBuilder| b.to_command().map(drop)),
        ];

        for (terminal, finish) in terminals {
            for (method, call) in methods {
                let builder = foo().select();
                finish(&builder).unwrap();

                let err = call(&builder).unwrap_err();
                assert!(
                    err.is_builder_finished(),
                    "`{method}` after `{terminal}`: {err}"
                );
                assert!(err.to_string().contains(&format!("`{method}`")), "{err}");
            }
        }
    }

    #[test]
    fn unions_check_the_other_operand_too() {
        let other = foo().select();
        other.build().unwrap();

        let err = foo().select().union(&other).unwrap_err();
        assert!(err.is_builder_finished());
    }

    #[test]
    fn plain_union_renders_directly() {
        let a = int_eq(1);
        let b = int_eq(2);

        let prepared = a.union(&b).unwrap().build().unwrap();
        assert_eq!(
            prepared.sql(),
            "SELECT * FROM [dbo].[Foo] WHERE ([Int] = @int)\n\
             UNION\n\
             SELECT * FROM [dbo].[Foo] WHERE ([Int] = @int_0)"
        );
        assert_eq!(prepared.params.get("@int_0"), Some(&Value::I32(2)));
    }

    #[test]
    fn union_renames_params_inside_subquery_operands() {
        let a = int_eq(1);
        let b = foo()
            .select()
            .where_field("Int", Operand::Equal, 2)
            .unwrap()
            .as_subquery()
            .unwrap();

        let prepared = a.union(&b).unwrap().build().unwrap();
        assert_eq!(
            prepared.sql(),
            "SELECT * FROM [dbo].[Foo] WHERE ([Int] = @int)\n\
             UNION\n\
             SELECT * FROM (\n    SELECT * FROM [dbo].[Foo] WHERE ([Int] = @int_0)\n) t0"
        );
        assert_eq!(prepared.params.get("@int"), Some(&Value::I32(1)));
        assert_eq!(prepared.params.get("@int_0"), Some(&Value::I32(2)));
    }

    #[test]
    fn union_rejects_colliding_params_in_custom_sql() {
        let a = int_eq(1);
        let b = foo()
            .select()
            .where_sql("[Int] = @int")
            .unwrap()
            .parameter("@int", 2)
            .unwrap();

        let err = a.union(&b).unwrap_err();
        assert!(err.is_invalid_statement());
    }

    #[test]
    fn configured_union_is_wrapped() {
        let a = foo().select();
        let b = foo().select();

        let sql = sql(&a.union_all(&b).unwrap().take(5).unwrap());
        assert_eq!(
            sql,
            "SELECT TOP (5) * FROM (\n    SELECT * FROM [dbo].[Foo]\n    UNION ALL\n    \
             SELECT * FROM [dbo].[Foo]\n) t0"
        );
    }

    #[test]
    fn count_drops_the_order() {
        let prepared = foo()
            .select()
            .order_by("Int")
            .unwrap()
            .build_count()
            .unwrap();
        assert_eq!(prepared.sql(), "SELECT COUNT(*) FROM [dbo].[Foo]");
    }

    #[test]
    fn delete_requires_a_plain_table() {
        let prepared = foo()
            .select()
            .where_field("Id", Operand::Equal, 7)
            .unwrap()
            .build_delete()
            .unwrap();
        assert_eq!(prepared.sql(), "DELETE FROM [dbo].[Foo] WHERE ([Id] = @id)");

        let aliased = foo().select().alias("f").unwrap();
        let err = aliased.build_delete().unwrap_err();
        assert!(err.is_invalid_statement());
    }

    #[test]
    fn aliases_must_be_identifiers() {
        let err = foo().select().alias("f WHERE 1 = 1 --").unwrap_err();
        assert!(err.is_invalid_statement());

        assert!(foo().alias("f]").unwrap_err().is_invalid_statement());
        assert_eq!(
            sql(&foo().alias("f").unwrap().select()),
            "SELECT * FROM [dbo].[Foo] f"
        );
    }
}
