use pretty_assertions::assert_eq;
use tabula_core::stmt::{Field, Operand, Select, SourceTable, Statement, Value, Where};
use tabula_sql::{assemble, pad_len, ParameterSet};

fn list_names(len: usize) -> Vec<String> {
    let mut params = ParameterSet::new();
    let values = (0..len as i32).map(Value::from).collect();
    params.add_list("Int", values)
}

fn expected(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("@int{i}")).collect()
}

#[test]
fn small_lists_are_not_padded() {
    for len in 1..=5 {
        assert_eq!(list_names(len), expected(len));
    }
}

#[test]
fn lists_pad_to_the_next_step() {
    for (len, padded) in [
        (6, 10),
        (9, 10),
        (10, 10),
        (11, 15),
        (14, 15),
        (15, 15),
        (16, 20),
        (21, 30),
    ] {
        assert_eq!(list_names(len), expected(padded), "len = {len}");
    }
}

#[test]
fn pad_table_edges() {
    assert_eq!(pad_len(0), 0);
    assert_eq!(pad_len(999), 1000);
    assert_eq!(pad_len(1000), 1000);
    assert_eq!(pad_len(1001), 1001);
}

#[test]
fn padding_repeats_the_last_value() {
    let mut params = ParameterSet::new();
    let names = params.add_list("Int", (1..=6).map(Value::I32).collect());

    assert_eq!(names.len(), 10);
    assert_eq!(params.get("@int5"), Some(&Value::I32(6)));
    assert_eq!(params.get("@int9"), Some(&Value::I32(6)));
    assert_eq!(params.get("@int0"), Some(&Value::I32(1)));
}

#[test]
fn same_property_predicates_get_distinct_names() {
    let mut params = ParameterSet::new();
    let low = params.add("Int", 1);
    let high = params.add("Int", 9);

    assert_eq!(low, "@int");
    assert_eq!(high, "@int_0");
    assert_eq!(params.get(&low), Some(&Value::I32(1)));
    assert_eq!(params.get(&high), Some(&Value::I32(9)));
}

#[test]
fn assemble_binds_parameters_in_order() {
    let mut params = ParameterSet::new();
    let name = params.add("Int", 2);
    let names = params.add_list("Name", vec![Value::from("a"), Value::from("b")]);

    let mut select = Select::new(SourceTable::new("dbo", "Foo", vec![]));
    select.and_where(Where::unary(Field::column("Int").unwrap(), Operand::LessThan, name).unwrap());
    select.and_where(Where::array(Field::column("Name").unwrap(), Operand::In, names).unwrap());

    let command = assemble(&Statement::from(select), &params);

    assert_eq!(
        command.sql,
        "SELECT * FROM [dbo].[Foo] WHERE ([Int] < @int)\nAND ([Name] IN (@name0, @name1))"
    );
    assert_eq!(
        command.parameter_names().collect::<Vec<_>>(),
        vec!["@int", "@name0", "@name1"]
    );
    assert_eq!(command.parameter("@name1"), Some(&Value::from("b")));
    assert!(command.declarations.is_empty());
}
