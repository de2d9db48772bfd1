mod map;
pub use map::{Column, DocumentMap, DocumentMapBuilder};

use crate::Result;

use tabula_core::TypeKey;

/// The root of a document hierarchy.
///
/// A root owns the [`DocumentMap`] describing how its rows are stored. A
/// polymorphic hierarchy is a root (usually an enum) whose variants are named
/// by [`TypeKey`]s; the type column selects the variant of each row.
pub trait DocumentRoot: Sized + Send + Sync + 'static {
    fn document_map() -> &'static DocumentMap<Self>;

    /// The concrete variant of this instance.
    fn type_key(&self) -> TypeKey;

    /// Every concrete variant of the hierarchy. Empty for a hierarchy with a
    /// single type, which then uses `TypeKey(<map name>)`.
    fn variants() -> &'static [TypeKey] {
        &[]
    }

    /// Builds the variant `ty` from its JSON state.
    fn from_json(ty: TypeKey, json: serde_json::Value) -> Result<Self>;

    fn to_json(&self) -> Result<serde_json::Value>;

    /// Creates an empty `ty` for rows without JSON state. Indexed columns are
    /// assigned afterwards.
    fn activate(ty: TypeKey) -> Result<Self>;
}

/// A type that can be queried from a document hierarchy: the root itself,
/// or one of its subtypes.
pub trait Document: Sized + Send + 'static {
    type Root: DocumentRoot;

    /// Whether rows of `variant` produce a `Self`. Rejected rows are dropped
    /// from the result before their JSON is parsed.
    fn accepts(variant: TypeKey) -> bool;

    fn from_root(root: Self::Root) -> Option<Self>;

    fn into_root(self) -> Self::Root;
}

impl<R: DocumentRoot> Document for R {
    type Root = R;

    fn accepts(variant: TypeKey) -> bool {
        !variant.is_hidden()
    }

    fn from_root(root: R) -> Option<R> {
        Some(root)
    }

    fn into_root(self) -> R {
        self
    }
}

/// Resolves the variants a root can produce: the declared variants, or the
/// map's own name for a single-type hierarchy.
pub(crate) fn variants_of<R: DocumentRoot>() -> Vec<TypeKey> {
    match R::variants() {
        [] => vec![TypeKey(R::document_map().schema().name)],
        variants => variants.to_vec(),
    }
}
