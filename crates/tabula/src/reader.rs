//! Row materialization.
//!
//! Reading happens in two phases. A [`ReaderPlan`] is compiled once per
//! result shape and target type, then invoked for every row with that shape.
//! Compiled plans are cached for the lifetime of the process.

mod cache;
pub use cache::plan_for;

mod context;
pub use context::ReadContext;

mod document;
pub use document::compile_document;

mod plan;
pub use plan::ReaderPlan;

mod primitive;

mod record;
pub use record::{compile_record, Record};

mod tuple;

use crate::Result;

use tabula_core::schema::RowShape;

/// A type that can be read from result rows.
///
/// Primitives read a single column, tuples read their columns by position,
/// [`Record`] types by name and documents through their
/// [`DocumentMap`](crate::DocumentMap).
pub trait Load: Sized + Send + 'static {
    fn compile(shape: &RowShape) -> Result<ReaderPlan<Self>>;
}

/// Implements [`Load`] for a [`Record`] type.
#[macro_export]
macro_rules! impl_record_load {
    ( $( $t:ty ),* $(,)? ) => {
        $(
            impl $crate::Load for $t {
                fn compile(
                    shape: &$crate::schema::RowShape,
                ) -> $crate::Result<$crate::reader::ReaderPlan<Self>> {
                    $crate::reader::compile_record::<Self>(shape)
                }
            }
        )*
    };
}

/// Implements [`Load`] for a [`Document`](crate::Document) type.
#[macro_export]
macro_rules! impl_document_load {
    ( $( $t:ty ),* $(,)? ) => {
        $(
            impl $crate::Load for $t {
                fn compile(
                    shape: &$crate::schema::RowShape,
                ) -> $crate::Result<$crate::reader::ReaderPlan<Self>> {
                    $crate::reader::compile_document::<Self>(shape)
                }
            }
        )*
    };
}
