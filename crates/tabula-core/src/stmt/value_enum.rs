/// The value of an enumerated type, bound as-is to a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    /// Name of the enum type
    pub ty: &'static str,

    /// Name of the variant
    pub name: String,

    /// Numeric discriminant of the variant
    pub discriminant: i64,
}

impl ValueEnum {
    pub fn new(ty: &'static str, name: impl Into<String>, discriminant: i64) -> Self {
        Self {
            ty,
            name: name.into(),
            discriminant,
        }
    }
}
