use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tabula::{
    bail,
    document::{Column, DocumentMap},
    stmt::{Field, Length, Primitive, SqlType, Value, ValueEnum},
    Document, DocumentRoot, JsonFormat, KeyStrategy, RelatedDocument, Result, TableName, TypeKey,
};

/// A single-type document with an identity key and JSON text state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Foo {
    #[serde(skip)]
    pub id: i32,

    #[serde(skip)]
    pub int: i32,

    #[serde(skip)]
    pub name: Option<String>,

    pub notes: String,
}

impl Foo {
    pub const ID: Field<Foo, i32> = Field::new("Id");
    pub const INT: Field<Foo, i32> = Field::new("Int");
    pub const NAME: Field<Foo, Option<String>> = Field::new("Name");
    pub const NOTES: Field<Foo, String> = Field::new("Notes");
}

static FOO: LazyLock<DocumentMap<Foo>> = LazyLock::new(|| {
    let mut builder = DocumentMap::builder(
        "Foo",
        TableName::new("dbo", "Foo"),
        Column::new("Id", |foo: &Foo| foo.id, |foo: &mut Foo, id| foo.id = id),
        KeyStrategy::Identity,
    );
    builder
        .column(Column::new("Int", |foo: &Foo| foo.int, |foo: &mut Foo, v| foo.int = v))
        .column(
            Column::new(
                "Name",
                |foo: &Foo| foo.name.clone(),
                |foo: &mut Foo, v| foo.name = v,
            )
            .ty(SqlType::NVarChar(Length::Fixed(10))),
        )
        .related(RelatedDocument::new(
            "Tags",
            TableName::new("dbo", "FooTags"),
            "FooId",
            "TagId",
        ))
        .json(JsonFormat::TextOnly);
    builder.build()
});

impl DocumentRoot for Foo {
    fn document_map() -> &'static DocumentMap<Self> {
        &FOO
    }

    fn type_key(&self) -> TypeKey {
        TypeKey("Foo")
    }

    fn from_json(_ty: TypeKey, json: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn activate(_ty: TypeKey) -> Result<Self> {
        Ok(Foo::default())
    }
}

/// A polymorphic hierarchy stored as compressed JSON, told apart by its
/// `Type` column.
#[derive(Debug, Clone, PartialEq)]
pub enum Animal {
    Dog(Dog),
    Cat(Cat),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    #[serde(skip)]
    pub id: i32,

    #[serde(skip)]
    pub name: String,

    pub good: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    #[serde(skip)]
    pub id: i32,

    #[serde(skip)]
    pub name: String,

    pub lives: i32,
}

pub const DOG: TypeKey = TypeKey("Dog");
pub const CAT: TypeKey = TypeKey("Cat");

impl Animal {
    pub fn id(&self) -> i32 {
        match self {
            Animal::Dog(dog) => dog.id,
            Animal::Cat(cat) => cat.id,
        }
    }

    fn set_id(&mut self, id: i32) {
        match self {
            Animal::Dog(dog) => dog.id = id,
            Animal::Cat(cat) => cat.id = id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Animal::Dog(dog) => &dog.name,
            Animal::Cat(cat) => &cat.name,
        }
    }

    fn set_name(&mut self, name: String) {
        match self {
            Animal::Dog(dog) => dog.name = name,
            Animal::Cat(cat) => cat.name = name,
        }
    }
}

static ANIMAL: LazyLock<DocumentMap<Animal>> = LazyLock::new(|| {
    let mut builder = DocumentMap::builder(
        "Animal",
        TableName::new("dbo", "Animal"),
        Column::new("Id", Animal::id, Animal::set_id),
        KeyStrategy::Assigned,
    );
    builder
        .type_column("Type")
        .column(Column::new(
            "Name",
            |animal: &Animal| animal.name().to_string(),
            Animal::set_name,
        ))
        .json(JsonFormat::CompressedOnly);
    builder.build()
});

impl DocumentRoot for Animal {
    fn document_map() -> &'static DocumentMap<Self> {
        &ANIMAL
    }

    fn type_key(&self) -> TypeKey {
        match self {
            Animal::Dog(_) => DOG,
            Animal::Cat(_) => CAT,
        }
    }

    fn variants() -> &'static [TypeKey] {
        &[DOG, CAT]
    }

    fn from_json(ty: TypeKey, json: serde_json::Value) -> Result<Self> {
        Ok(match ty.name() {
            "Dog" => Animal::Dog(serde_json::from_value(json)?),
            "Cat" => Animal::Cat(serde_json::from_value(json)?),
            other => bail!("`{other}` is not an animal"),
        })
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(match self {
            Animal::Dog(dog) => serde_json::to_value(dog)?,
            Animal::Cat(cat) => serde_json::to_value(cat)?,
        })
    }

    fn activate(ty: TypeKey) -> Result<Self> {
        Ok(match ty.name() {
            "Dog" => Animal::Dog(Dog::default()),
            "Cat" => Animal::Cat(Cat::default()),
            other => bail!("`{other}` is not an animal"),
        })
    }
}

impl Document for Dog {
    type Root = Animal;

    fn accepts(variant: TypeKey) -> bool {
        variant == DOG
    }

    fn from_root(root: Animal) -> Option<Dog> {
        match root {
            Animal::Dog(dog) => Some(dog),
            Animal::Cat(_) => None,
        }
    }

    fn into_root(self) -> Animal {
        Animal::Dog(self)
    }
}

/// A document whose table keeps its `JSON` column in the middle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legacy {
    #[serde(skip)]
    pub id: i32,

    #[serde(skip)]
    pub int: i32,

    pub label: String,
}

static LEGACY: LazyLock<DocumentMap<Legacy>> = LazyLock::new(|| {
    let mut builder = DocumentMap::builder(
        "Legacy",
        TableName::new("dbo", "Legacy"),
        Column::new(
            "Id",
            |doc: &Legacy| doc.id,
            |doc: &mut Legacy, id| doc.id = id,
        ),
        KeyStrategy::Assigned,
    );
    builder
        .column(Column::new(
            "Int",
            |doc: &Legacy| doc.int,
            |doc: &mut Legacy, v| doc.int = v,
        ))
        .json(JsonFormat::TextOnly);
    builder.build()
});

impl DocumentRoot for Legacy {
    fn document_map() -> &'static DocumentMap<Self> {
        &LEGACY
    }

    fn type_key(&self) -> TypeKey {
        TypeKey("Legacy")
    }

    fn from_json(_ty: TypeKey, json: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn activate(_ty: TypeKey) -> Result<Self> {
        Ok(Legacy::default())
    }
}

/// Stored as its discriminant, bound as a named enum value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Kind {
    #[default]
    A,
    B,
}

impl Primitive for Kind {
    const SQL_TYPE: SqlType = SqlType::Int;

    fn load(value: Value) -> Result<Self> {
        let discriminant = match value {
            Value::Enum(value) => value.discriminant,
            other => i64::from(i32::load(other)?),
        };
        match discriminant {
            0 => Ok(Kind::A),
            1 => Ok(Kind::B),
            other => bail!("{other} is not a kind"),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Kind::A => Value::Enum(ValueEnum::new("Kind", "A", 0)),
            Kind::B => Value::Enum(ValueEnum::new("Kind", "B", 1)),
        }
    }
}

/// A document whose table carries both JSON columns and writes the
/// compressed one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(skip)]
    pub id: i32,

    #[serde(skip)]
    pub kind: Kind,

    pub title: String,
}

impl Ticket {
    pub const KIND: Field<Ticket, Kind> = Field::new("Kind");
}

static TICKET: LazyLock<DocumentMap<Ticket>> = LazyLock::new(|| {
    let mut builder = DocumentMap::builder(
        "Ticket",
        TableName::new("dbo", "Ticket"),
        Column::new(
            "Id",
            |doc: &Ticket| doc.id,
            |doc: &mut Ticket, id| doc.id = id,
        ),
        KeyStrategy::Assigned,
    );
    builder
        .column(Column::new(
            "Kind",
            |doc: &Ticket| doc.kind,
            |doc: &mut Ticket, kind| doc.kind = kind,
        ))
        .json(JsonFormat::MixedPreferCompressed);
    builder.build()
});

impl DocumentRoot for Ticket {
    fn document_map() -> &'static DocumentMap<Self> {
        &TICKET
    }

    fn type_key(&self) -> TypeKey {
        TypeKey("Ticket")
    }

    fn from_json(_ty: TypeKey, json: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn activate(_ty: TypeKey) -> Result<Self> {
        Ok(Ticket::default())
    }
}

tabula::impl_document_load!(Foo, Animal, Dog, Legacy, Ticket);
