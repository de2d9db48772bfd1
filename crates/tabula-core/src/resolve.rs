//! Mapping between type-column values and concrete document variants.

use crate::stmt::Value;

use std::fmt;

/// Names one concrete variant of a document hierarchy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey(pub &'static str);

impl TypeKey {
    /// Returned by a resolver to drop the row from the results.
    pub const HIDDEN: TypeKey = TypeKey("<hidden>");

    pub fn name(self) -> &'static str {
        self.0
    }

    pub fn is_hidden(self) -> bool {
        self == Self::HIDDEN
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Resolves the concrete variant of a row from its type column, and the
/// type column value of a variant being written.
///
/// Registered per root document type.
pub trait InstanceTypeResolver: Send + Sync {
    /// Returns `None` when `value` names no known variant.
    fn resolve_from_value(&self, variants: &[TypeKey], value: &Value) -> Option<TypeKey>;

    fn resolve_value_from_type(&self, variant: TypeKey) -> Option<Value>;
}

/// Stores the variant name itself in the type column.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTypeResolver;

impl InstanceTypeResolver for DefaultTypeResolver {
    fn resolve_from_value(&self, variants: &[TypeKey], value: &Value) -> Option<TypeKey> {
        let name = value.as_str()?;
        variants
            .iter()
            .copied()
            .find(|variant| variant.name() == name)
    }

    fn resolve_value_from_type(&self, variant: TypeKey) -> Option<Value> {
        if variant.is_hidden() {
            return None;
        }
        Some(Value::String(variant.name().to_string()))
    }
}

/// Custom conversion of one property between its column and document
/// representation.
pub trait PropertyHandler: Send + Sync {
    /// Converts a column value into the value handed to the property setter.
    fn read(&self, value: Value) -> crate::Result<Value>;

    /// Converts a property value into the value written to the column.
    fn write(&self, value: Value) -> crate::Result<Value>;
}
