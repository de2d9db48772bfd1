mod support;
use support::*;

use pretty_assertions::assert_eq;
use std::sync::Arc;
use tabula::{
    reader::plan_for,
    stmt::{Primitive, Value},
    Db, DocumentRoot, DocumentSerializer, InstanceTypeResolver, JsonSerializer, Record, Result,
    TypeKey,
};

const FOO_COLUMNS: &[&str] = &["Id", "Int", "Name", "JSON"];
const ANIMAL_COLUMNS: &[&str] = &["Id", "Type", "Name", "JSONBlob"];

fn compressed(json: serde_json::Value) -> Value {
    let bytes = JsonSerializer::default()
        .serialize_compressed(&json, Animal::document_map().schema())
        .unwrap();
    Value::Bytes(bytes)
}

fn animal(id: i32, ty: &str, name: &str, json: serde_json::Value) -> Vec<Value> {
    vec![
        Value::I32(id),
        Value::from(ty),
        Value::from(name),
        compressed(json),
    ]
}

#[tokio::test]
async fn reads_text_documents() {
    let conn = FakeConnection::new();
    conn.rows(
        FOO_COLUMNS,
        vec![
            vec![
                Value::I32(1),
                Value::I32(5),
                Value::from("one"),
                Value::from(r#"{"notes":"first"}"#),
            ],
            vec![
                Value::I32(2),
                Value::I32(6),
                Value::Null,
                Value::from(r#"{"notes":"second"}"#),
            ],
        ],
    );

    let foos = db(&conn).query::<Foo>().unwrap().to_list().await.unwrap();

    assert_eq!(
        foos,
        vec![
            Foo {
                id: 1,
                int: 5,
                name: Some("one".into()),
                notes: "first".into(),
            },
            Foo {
                id: 2,
                int: 6,
                name: None,
                notes: "second".into(),
            },
        ]
    );
}

#[tokio::test]
async fn null_json_activates_an_empty_document() {
    let conn = FakeConnection::new();
    conn.rows(
        FOO_COLUMNS,
        vec![vec![Value::I32(3), Value::I32(7), Value::Null, Value::Null]],
    );

    let foo = db(&conn).query::<Foo>().unwrap().first().await.unwrap();

    assert_eq!(
        foo,
        Some(Foo {
            id: 3,
            int: 7,
            ..Foo::default()
        })
    );
}

#[tokio::test]
async fn reads_compressed_polymorphic_documents() {
    let conn = FakeConnection::new();
    conn.rows(
        ANIMAL_COLUMNS,
        vec![
            animal(1, "Dog", "Rex", serde_json::json!({ "good": true })),
            animal(2, "Cat", "Tom", serde_json::json!({ "lives": 9 })),
        ],
    );

    let animals = db(&conn)
        .query::<Animal>()
        .unwrap()
        .to_list()
        .await
        .unwrap();

    assert_eq!(
        animals,
        vec![
            Animal::Dog(Dog {
                id: 1,
                name: "Rex".into(),
                good: true,
            }),
            Animal::Cat(Cat {
                id: 2,
                name: "Tom".into(),
                lives: 9,
            }),
        ]
    );
}

const TICKET_COLUMNS: &[&str] = &["Id", "Kind", "JSON", "JSONBlob"];

#[tokio::test]
async fn written_text_reads_back_equal() {
    let conn = FakeConnection::new();
    conn.rows(&["Id"], vec![vec![Value::I32(42)]]);

    let db = db(&conn);
    let mut foo = Foo {
        id: 0,
        int: 5,
        name: Some("five".into()),
        notes: "hello".into(),
    };
    db.insert(&mut foo).await.unwrap();

    let written = conn.last();
    let row = ["@int", "@name", "@json"]
        .iter()
        .map(|name| written.parameter(name).cloned().unwrap());
    conn.rows(
        FOO_COLUMNS,
        vec![std::iter::once(Value::I32(foo.id)).chain(row).collect()],
    );

    let read = db.query::<Foo>().unwrap().first().await.unwrap();
    assert_eq!(read, Some(foo));
}

#[tokio::test]
async fn written_blobs_read_back_equal() {
    let conn = FakeConnection::new();
    conn.count(1);

    let db = db(&conn);
    let mut cat = Animal::Cat(Cat {
        id: 4,
        name: "Tom".into(),
        lives: 9,
    });
    db.insert(&mut cat).await.unwrap();

    let written = conn.last();
    let row = ["@id", "@type", "@name", "@jsonBlob"]
        .iter()
        .map(|name| written.parameter(name).cloned().unwrap())
        .collect();
    conn.rows(ANIMAL_COLUMNS, vec![row]);

    let animals = db.query::<Animal>().unwrap().to_list().await.unwrap();
    assert_eq!(animals, vec![cat]);
}

#[tokio::test]
async fn mixed_documents_prefer_their_configured_column() {
    let conn = FakeConnection::new();
    conn.count(1);

    let db = db(&conn);
    let mut ticket = Ticket {
        id: 3,
        kind: Kind::B,
        title: "current".into(),
    };
    db.insert(&mut ticket).await.unwrap();

    let written = conn.last();
    assert_eq!(written.parameter("@json"), Some(&Value::Null));
    let kind = written.parameter("@kind").cloned().unwrap();
    let blob = written.parameter("@jsonBlob").cloned().unwrap();

    conn.rows(
        TICKET_COLUMNS,
        vec![
            // Both columns set: the compressed state wins over stale text
            vec![
                Value::I32(3),
                kind,
                Value::from(r#"{"title":"stale"}"#),
                blob,
            ],
            // Only the text column set
            vec![
                Value::I32(4),
                Value::I32(0),
                Value::from(r#"{"title":"text only"}"#),
                Value::Null,
            ],
        ],
    );

    let tickets = db.query::<Ticket>().unwrap().to_list().await.unwrap();
    assert_eq!(
        tickets,
        vec![
            ticket,
            Ticket {
                id: 4,
                kind: Kind::A,
                title: "text only".into(),
            },
        ]
    );
}

#[tokio::test]
async fn subtype_queries_skip_other_variants() {
    let conn = FakeConnection::new();
    conn.rows(
        ANIMAL_COLUMNS,
        vec![
            // Never parsed: the row is dropped as soon as its type is known
            vec![
                Value::I32(1),
                Value::from("Cat"),
                Value::from("Tom"),
                Value::Bytes(b"not gzip".to_vec()),
            ],
            animal(2, "Dog", "Rex", serde_json::json!({ "good": false })),
        ],
    );

    let dogs = db(&conn).query::<Dog>().unwrap().to_list().await.unwrap();

    assert_eq!(
        dogs,
        vec![Dog {
            id: 2,
            name: "Rex".into(),
            good: false,
        }]
    );
}

#[derive(Debug)]
struct HideCats;

impl InstanceTypeResolver for HideCats {
    fn resolve_from_value(&self, variants: &[TypeKey], value: &Value) -> Option<TypeKey> {
        match value.as_str()? {
            "Cat" => Some(TypeKey::HIDDEN),
            name => variants.iter().copied().find(|v| v.name() == name),
        }
    }

    fn resolve_value_from_type(&self, variant: TypeKey) -> Option<Value> {
        Some(Value::from(variant.name()))
    }
}

#[tokio::test]
async fn hidden_rows_are_dropped() {
    let conn = FakeConnection::new();
    conn.rows(
        ANIMAL_COLUMNS,
        vec![
            animal(1, "Cat", "Tom", serde_json::json!({ "lives": 9 })),
            animal(2, "Dog", "Rex", serde_json::json!({ "good": true })),
        ],
    );

    let db = Db::builder()
        .column_names(COLUMNS.clone())
        .type_resolver::<Animal>(HideCats)
        .build(conn.clone());

    let animals = db.query::<Animal>().unwrap().to_list().await.unwrap();
    assert_eq!(animals.len(), 1);
    assert_eq!(animals[0].name(), "Rex");
}

#[tokio::test]
async fn unknown_type_values_fail_with_the_row() {
    let conn = FakeConnection::new();
    conn.rows(
        ANIMAL_COLUMNS,
        vec![
            animal(1, "Dog", "Rex", serde_json::json!({ "good": true })),
            animal(2, "Fish", "Nemo", serde_json::json!({})),
        ],
    );

    let err = db(&conn)
        .query::<Animal>()
        .unwrap()
        .to_list()
        .await
        .unwrap_err();

    assert!(err.is_unresolved_type());
    assert!(err.is_row_materialization());
    let message = err.to_string();
    assert!(message.contains("row 1"), "{message}");
    assert!(message.contains("Fish"), "{message}");
}

#[tokio::test]
async fn documents_require_their_id_and_json_columns() {
    let conn = FakeConnection::new();
    conn.rows(&["Int", "JSON"], vec![]);
    conn.rows(&["Id", "Int"], vec![]);

    let db = db(&conn);
    let foo = db.table("Foo").unwrap();

    let builder = foo.select().columns(["Int", "JSON"]).unwrap();
    let err = db.fetch::<Foo>(&builder).await.unwrap_err();
    assert!(err.is_invalid_reader());
    assert!(err.to_string().contains("`Id`"));

    let builder = foo.select().columns(["Id", "Int"]).unwrap();
    let err = db.fetch::<Foo>(&builder).await.unwrap_err();
    assert!(err.is_invalid_reader());
    assert!(err.to_string().contains("record or tuple"));
}

#[tokio::test]
async fn type_column_must_precede_json() {
    let conn = FakeConnection::new();
    conn.rows(&["Id", "JSONBlob", "Type", "Name"], vec![]);

    let db = db(&conn);
    let builder = db
        .table("Animal")
        .unwrap()
        .select()
        .columns(["Id", "JSONBlob", "Type", "Name"])
        .unwrap();

    let err = db.fetch::<Animal>(&builder).await.unwrap_err();
    assert!(err.is_invalid_reader());
    assert!(err.to_string().contains("select the type column first"));
}

#[tokio::test]
async fn conversion_failures_name_the_column() {
    let conn = FakeConnection::new();
    conn.rows(
        FOO_COLUMNS,
        vec![vec![
            Value::I32(1),
            Value::from("five"),
            Value::Null,
            Value::Null,
        ]],
    );

    let err = db(&conn)
        .query::<Foo>()
        .unwrap()
        .to_list()
        .await
        .unwrap_err();

    assert!(err.is_row_materialization());
    assert!(err.to_string().contains("row 0 at column 1 `Int`"));
}

#[tokio::test]
async fn large_documents_switch_to_streaming() {
    let conn = FakeConnection::new();
    conn.rows(
        &["Id", "JSON", "Int"],
        vec![vec![
            Value::I32(1),
            Value::from(r#"{"label":"a label long enough to cross the threshold"}"#),
            Value::I32(2),
        ]],
    );
    conn.rows(
        &["Id", "JSON", "Int"],
        vec![vec![
            Value::I32(2),
            Value::from(r#"{"label":"b"}"#),
            Value::I32(3),
        ]],
    );

    let db = Db::builder()
        .column_names(COLUMNS.clone())
        .large_document_threshold(16)
        .build(conn.clone());

    let schema = Legacy::document_map().schema();
    assert!(!schema.prefers_streaming());

    let first = db.query::<Legacy>().unwrap().to_list().await.unwrap();
    assert!(schema.prefers_streaming());

    // Streaming reads produce the same documents
    let second = db.query::<Legacy>().unwrap().to_list().await.unwrap();
    assert_eq!(first[0].label, "a label long enough to cross the threshold");
    assert_eq!(
        second,
        vec![Legacy {
            id: 2,
            int: 3,
            label: "b".into(),
        }]
    );
}

#[tokio::test]
async fn reads_scalars_and_tuples() {
    let conn = FakeConnection::new();
    conn.rows(&["Id"], vec![vec![Value::I32(1)], vec![Value::I32(2)]]);
    conn.rows(
        &["Id", "Name"],
        vec![
            vec![Value::I32(1), Value::from("one")],
            vec![Value::I32(2), Value::Null],
        ],
    );

    let db = db(&conn);
    let foo = db.table("Foo").unwrap();

    let ids: Vec<i32> = db
        .fetch::<i32>(&foo.select().column("Id").unwrap())
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(ids, vec![1, 2]);

    let pairs: Vec<(i32, Option<String>)> = db
        .fetch::<(i32, Option<String>)>(&foo.select().columns(["Id", "Name"]).unwrap())
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(pairs, vec![(1, Some("one".into())), (2, None)]);
}

#[derive(Debug, Default, PartialEq)]
struct NameCount {
    name: Option<String>,
    total: i64,
}

impl Record for NameCount {
    const FIELDS: &'static [&'static str] = &["Name", "Total"];

    fn set_field(&mut self, index: usize, value: Value) -> Result<()> {
        match index {
            0 => self.name = Primitive::load(value)?,
            _ => self.total = Primitive::load(value)?,
        }
        Ok(())
    }
}

tabula::impl_record_load!(NameCount);

#[tokio::test]
async fn reads_records_by_name() {
    let conn = FakeConnection::new();
    conn.rows(
        &["total", "NAME"],
        vec![vec![Value::I64(4), Value::from("one")]],
    );
    conn.rows(&["Name", "Other"], vec![]);

    let db = db(&conn);
    let foo = db.table("Foo").unwrap();

    let mut cursor = db
        .fetch::<NameCount>(&foo.select().column("Name").unwrap())
        .await
        .unwrap();
    assert_eq!(
        cursor.next().await.transpose().unwrap(),
        Some(NameCount {
            name: Some("one".into()),
            total: 4,
        })
    );
    assert!(cursor.next().await.is_none());

    let err = db
        .fetch::<NameCount>(&foo.select().column("Name").unwrap())
        .await
        .unwrap_err();
    assert!(err.is_invalid_reader());
    assert!(err.to_string().contains("`Other`"));
}

#[test]
fn plans_are_compiled_once_per_shape_and_type() {
    let a = plan_for::<Foo>(&shape(FOO_COLUMNS)).unwrap();
    let b = plan_for::<Foo>(&shape(FOO_COLUMNS)).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let reordered = plan_for::<Foo>(&shape(&["JSON", "Id", "Int", "Name"])).unwrap();
    assert!(!Arc::ptr_eq(&a, &reordered));
}
