use super::{Load, ReaderPlan};
use crate::{stmt::Primitive, Error, Result};

use tabula_core::schema::RowShape;
use uuid::Uuid;

/// A single-column read.
pub(super) fn compile_scalar<T: Primitive>(shape: &RowShape) -> Result<ReaderPlan<T>> {
    if shape.len() != 1 {
        return Err(Error::invalid_reader(format!(
            "`{}` is read from exactly one column, the result has {} ({})",
            std::any::type_name::<T>(),
            shape.len(),
            shape.key(),
        )));
    }

    let column = shape.name(0).to_string();

    Ok(ReaderPlan::new(move |_, row, mut record| {
        T::load(record.take(0))
            .map(Some)
            .map_err(|err| err.context(Error::row_materialization(row, 0, &column)))
    }))
}

macro_rules! impl_load_scalar {
    ( $( $t:ty ),* ) => {
        $(
            impl Load for $t {
                fn compile(shape: &RowShape) -> Result<ReaderPlan<Self>> {
                    compile_scalar(shape)
                }
            }

            impl Load for Option<$t> {
                fn compile(shape: &RowShape) -> Result<ReaderPlan<Self>> {
                    compile_scalar(shape)
                }
            }
        )*
    };
}

impl_load_scalar!(bool, u8, i16, i32, i64, f64, String, Vec<u8>, Uuid);
