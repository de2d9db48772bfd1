use super::{Load, ReaderPlan};
use crate::{stmt::Primitive, Error, Result};

use tabula_core::schema::RowShape;

fn check_arity<T>(shape: &RowShape, arity: usize) -> Result<Vec<String>> {
    if shape.len() != arity {
        return Err(Error::invalid_reader(format!(
            "`{}` reads {arity} columns by position, the result has {} ({})",
            std::any::type_name::<T>(),
            shape.len(),
            shape.key(),
        )));
    }
    Ok(shape.names().map(str::to_string).collect())
}

macro_rules! impl_load_tuple {
    ( $len:expr; $( $n:tt $t:ident ),* ) => {
        impl<$( $t ),*> Load for ( $( $t, )* )
        where
            $( $t: Primitive, )*
        {
            fn compile(shape: &RowShape) -> Result<ReaderPlan<Self>> {
                let columns = check_arity::<Self>(shape, $len)?;

                Ok(ReaderPlan::new(move |_, row, mut record| {
                    Ok(Some(( $(
                        $t::load(record.take($n)).map_err(|err| {
                            err.context(Error::row_materialization(row, $n, &columns[$n]))
                        })?,
                    )* )))
                }))
            }
        }
    };
}

impl_load_tuple!(2; 0 T0, 1 T1);
impl_load_tuple!(3; 0 T0, 1 T1, 2 T2);
impl_load_tuple!(4; 0 T0, 1 T1, 2 T2, 3 T3);
impl_load_tuple!(5; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4);
impl_load_tuple!(6; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5);
impl_load_tuple!(7; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6);
impl_load_tuple!(8; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadContext;
    use tabula_core::{
        schema::ColumnInfo,
        stmt::{SqlType, Value, ValueRecord},
    };

    #[test]
    fn reads_by_position() {
        let shape: RowShape = ["Id", "Name"]
            .into_iter()
            .map(|name| ColumnInfo::new(name, SqlType::Int))
            .collect();
        let plan = <(i32, Option<String>)>::compile(&shape).unwrap();

        let row = ValueRecord::from_vec(vec![Value::I32(1), Value::Null]);
        assert_eq!(
            plan.read(&ReadContext::default(), 0, row).unwrap(),
            Some((1, None))
        );
    }

    #[test]
    fn column_count_must_match() {
        let shape: RowShape = ["Id"]
            .into_iter()
            .map(|name| ColumnInfo::new(name, SqlType::Int))
            .collect();
        let err = <(i32, i32)>::compile(&shape).unwrap_err();
        assert!(err.is_invalid_reader());
    }
}
