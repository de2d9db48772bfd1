use pretty_assertions::assert_eq;
use tabula_core::stmt::*;
use tabula_sql::{GenerateSql, Serializer};

fn foo() -> SourceTable {
    SourceTable::new(
        "dbo",
        "Foo",
        vec!["Id".into(), "Int".into(), "Name".into(), "JSON".into()],
    )
}

fn col(name: &str) -> Field {
    Field::column(name).unwrap()
}

#[test]
fn select_star_with_where_and_order() {
    let mut select = Select::new(foo());
    select.and_where(Where::unary(col("Int"), Operand::LessThan, "@int").unwrap());
    select.order_by = Some(OrderByField::asc(col("Id")).into());

    assert_eq!(
        select.generate_sql(),
        "SELECT * FROM [dbo].[Foo] WHERE ([Int] < @int) ORDER BY [Id]"
    );
}

#[test]
fn generation_is_deterministic() {
    let mut select = Select::new(foo());
    select.and_where(Where::unary(col("Int"), Operand::GreaterThan, "@int").unwrap());
    let stmt = Statement::from(select);

    let serializer = Serializer::new();
    assert_eq!(serializer.serialize(&stmt), serializer.serialize(&stmt));
}

#[test]
fn conjuncts_are_parenthesized_on_their_own_lines() {
    let mut select = Select::new(foo());
    select.and_where(Where::unary(col("Int"), Operand::GreaterThan, "@int").unwrap());
    select.and_where(Where::unary(col("Int"), Operand::LessThanOrEqual, "@int_0").unwrap());
    select.and_where(Where::is_not_null(col("Name")));

    assert_eq!(
        select.generate_sql(),
        "SELECT * FROM [dbo].[Foo] WHERE ([Int] > @int)\nAND ([Int] <= @int_0)\nAND ([Name] IS NOT NULL)"
    );
}

#[test]
fn clause_operators() {
    let cases = [
        (
            Where::between(col("Int"), "@low", "@high").unwrap(),
            "([Int] BETWEEN @low AND @high)",
        ),
        (
            Where::array(
                col("Int"),
                Operand::In,
                vec!["@int0".into(), "@int1".into()],
            )
            .unwrap(),
            "([Int] IN (@int0, @int1))",
        ),
        (
            Where::array(col("Int"), Operand::NotIn, vec!["@int0".into()]).unwrap(),
            "([Int] NOT IN (@int0))",
        ),
        (
            Where::unary(col("Name"), Operand::StartsWith, "@name").unwrap(),
            "([Name] LIKE @name)",
        ),
        (
            Where::unary(col("Name"), Operand::NotEqual, "@name").unwrap(),
            "([Name] <> @name)",
        ),
        (Where::is_null(col("Name")), "([Name] IS NULL)"),
        (Where::custom("1 = 0"), "(1 = 0)"),
    ];

    for (clause, expected) in cases {
        assert_eq!(clause.generate_sql(), expected);
    }
}

#[test]
fn json_path_fields() {
    let field = Field::json("JSON", "Address.City").unwrap();
    assert_eq!(field.generate_sql(), "JSON_VALUE([JSON], '$.Address.City')");

    let field = field.qualify("t0");
    assert_eq!(
        field.generate_sql(),
        "JSON_VALUE(t0.[JSON], '$.Address.City')"
    );
}

#[test]
fn identifiers_escape_brackets() {
    let table = SourceTable::new("my]schema", "Fo]o", vec![]);
    assert_eq!(table.generate_sql(), "[my]]schema].[Fo]]o]");
}

#[test]
fn order_by_suppressed_for_count_and_group_by() {
    let mut select = Select::new(foo());
    select.order_by = Some(OrderByField::desc(col("Id")).into());
    select.columns = Columns::Count;
    assert_eq!(select.generate_sql(), "SELECT COUNT(*) FROM [dbo].[Foo]");

    let mut select = Select::new(foo());
    select.order_by = Some(OrderByField::desc(col("Id")).into());
    select.columns = Columns::List(vec![
        SelectColumn::Field {
            field: col("Name"),
            alias: None,
        },
        SelectColumn::Aggregate {
            func: Aggregate::Sum,
            field: Some(col("Int")),
            alias: Some("Total".into()),
        },
    ]);
    select.group_by = Some(GroupBy::new(vec![col("Name")]).unwrap());
    assert_eq!(
        select.generate_sql(),
        "SELECT [Name], SUM([Int]) AS [Total] FROM [dbo].[Foo] GROUP BY [Name]"
    );
}

#[test]
fn top_distinct_and_options() {
    let mut select = Select::new(foo());
    select.row_selection = RowSelection {
        distinct: true,
        top: Some(5),
    };
    select.columns = Columns::fields([col("Name")]);
    select.order_by = Some(OrderBy::new(vec![OrderByField::desc(col("Name"))]).unwrap());
    select.options = vec![QueryOption::Recompile, QueryOption::MaxDop(1)];

    assert_eq!(
        select.generate_sql(),
        "SELECT DISTINCT TOP (5) [Name] FROM [dbo].[Foo] ORDER BY [Name] DESC OPTION (RECOMPILE, MAXDOP 1)"
    );
}

#[test]
fn row_number_takes_over_statement_order() {
    let mut select = Select::new(foo());
    select.order_by = Some(OrderByField::desc(col("Int")).into());
    let select = select
        .with_row_number(vec![col("Name")], None, "RowNumber")
        .unwrap();

    assert_eq!(
        select.generate_sql(),
        "SELECT *, ROW_NUMBER() OVER (PARTITION BY [Name] ORDER BY [Int] DESC) AS [RowNumber] FROM [dbo].[Foo]"
    );
}

#[test]
fn joins() {
    let root = foo().with_alias("t0");
    let bar = SourceTable::new("dbo", "Bar", vec!["FooId".into()]).with_alias("t1");
    let baz = SourceTable::new("dbo", "Baz", vec![]).with_alias("t2");

    let joined = SourceJoined::new(
        root,
        vec![
            Join::new(
                JoinKind::Inner,
                bar.clone(),
                vec![JoinOn::eq(col("Id").qualify("t0"), col("FooId").qualify("t1"))],
            ),
            Join::new(JoinKind::Cross, baz, vec![]),
        ],
    )
    .unwrap();

    assert_eq!(
        Select::new(joined).generate_sql(),
        "SELECT * FROM [dbo].[Foo] t0\nINNER JOIN [dbo].[Bar] t1 ON t0.[Id] = t1.[FooId]\nCROSS JOIN [dbo].[Baz] t2"
    );

    let hash = Join::new(
        JoinKind::LeftHash,
        bar,
        vec![
            JoinOn::eq(col("Id").qualify("t0"), col("FooId").qualify("t1")),
            JoinOn::new(
                col("Int").qualify("t0"),
                Operand::GreaterThan,
                Field::raw("0"),
            )
            .unwrap(),
        ],
    );
    assert_eq!(
        hash.generate_sql(),
        "LEFT HASH JOIN [dbo].[Bar] t1 ON t0.[Id] = t1.[FooId] AND t0.[Int] > 0"
    );
}

#[test]
fn join_clause_counts_are_validated() {
    let cross = Join::new(
        JoinKind::Cross,
        foo(),
        vec![JoinOn::eq(col("Id"), col("Id"))],
    );
    let err = SourceJoined::new(foo(), vec![cross]).unwrap_err();
    assert!(err.is_invalid_statement());

    for kind in [JoinKind::Inner, JoinKind::Left, JoinKind::LeftHash] {
        let join = Join::new(kind, foo(), vec![]);
        assert!(SourceJoined::new(foo(), vec![join]).is_err());
    }
}

#[test]
fn on_clauses_reject_patterns_and_lists() {
    assert!(JoinOn::new(col("A"), Operand::Contains, col("B")).is_err());
    assert!(JoinOn::new(col("A"), Operand::In, col("B")).is_err());
}

#[test]
fn subquery_indents_inner_sql() {
    let mut inner = Select::new(foo());
    inner.and_where(Where::unary(col("Int"), Operand::Equal, "@int").unwrap());
    let outer = Select::new(SourceSubquery::new(inner, "t0"));

    assert_eq!(
        outer.generate_sql(),
        "SELECT * FROM (\n    SELECT * FROM [dbo].[Foo] WHERE ([Int] = @int)\n) t0"
    );
}

#[test]
fn union_and_union_all() {
    let a = Select::new(foo());
    let b = Select::new(SourceTable::new("dbo", "Bar", vec![]));

    let union = Union::new(vec![a.clone(), b.clone()], false).unwrap();
    assert_eq!(
        union.generate_sql(),
        "SELECT * FROM [dbo].[Foo]\nUNION\nSELECT * FROM [dbo].[Bar]"
    );

    let union = Union::new(vec![a.clone(), b], true).unwrap();
    let wrapped = Select::new(SourceSubquery::new(union, "t1"));
    assert_eq!(
        wrapped.generate_sql(),
        "SELECT * FROM (\n    SELECT * FROM [dbo].[Foo]\n    UNION ALL\n    SELECT * FROM [dbo].[Bar]\n) t1"
    );

    assert!(Union::new(vec![a], false).is_err());
}

#[test]
fn in_subquery() {
    let mut link = Select::new(SourceTable::new("dbo", "FooBar", vec![]));
    link.columns = Columns::fields([col("BarId")]);
    link.and_where(Where::unary(col("FooId"), Operand::Equal, "@fooId").unwrap());

    let mut select = Select::new(SourceTable::new("dbo", "Bar", vec![]));
    select.and_where(Where::in_subquery(col("Id"), link));

    assert_eq!(
        select.generate_sql(),
        "SELECT * FROM [dbo].[Bar] WHERE ([Id] IN (\n    SELECT [BarId] FROM [dbo].[FooBar] WHERE ([FooId] = @fooId)\n))"
    );
}

#[test]
fn order_by_requires_fields() {
    assert!(OrderBy::new(vec![]).unwrap_err().is_invalid_statement());
    assert!(GroupBy::new(vec![]).is_err());
}
