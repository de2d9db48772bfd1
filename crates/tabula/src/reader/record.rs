use super::ReaderPlan;
use crate::{Error, Result};

use tabula_core::{schema::RowShape, stmt::Value};

/// A plain type read column by column, matching names to fields without
/// regard to case.
///
/// Every result column must match a field. Fields without a column keep
/// their default value.
///
/// ```ignore
/// #[derive(Default)]
/// struct Summary {
///     name: String,
///     total: i64,
/// }
///
/// impl Record for Summary {
///     const FIELDS: &'static [&'static str] = &["Name", "Total"];
///
///     fn set_field(&mut self, index: usize, value: Value) -> Result<()> {
///         match index {
///             0 => self.name = Primitive::load(value)?,
///             _ => self.total = Primitive::load(value)?,
///         }
///         Ok(())
///     }
/// }
///
/// impl_record_load!(Summary);
/// ```
pub trait Record: Default + Send + 'static {
    const FIELDS: &'static [&'static str];

    /// Assigns field `index` of [`Self::FIELDS`].
    fn set_field(&mut self, index: usize, value: Value) -> Result<()>;
}

pub fn compile_record<T: Record>(shape: &RowShape) -> Result<ReaderPlan<T>> {
    let mut targets = Vec::with_capacity(shape.len());

    for name in shape.names() {
        let Some(field) = T::FIELDS
            .iter()
            .position(|field| field.eq_ignore_ascii_case(name))
        else {
            return Err(Error::invalid_reader(format!(
                "column `{name}` has no matching field on `{}`; fields are {}",
                std::any::type_name::<T>(),
                T::FIELDS.join(", "),
            )));
        };

        targets.push((field, name.to_string()));
    }

    Ok(ReaderPlan::new(move |_, row, mut record| {
        let mut out = T::default();

        for (position, (field, column)) in targets.iter().enumerate() {
            out.set_field(*field, record.take(position))
                .map_err(|err| err.context(Error::row_materialization(row, position, column)))?;
        }

        Ok(Some(out))
    }))
}
