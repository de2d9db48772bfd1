use super::Value;

/// One result row, positionally matching a [`RowShape`](crate::schema::RowShape).
///
/// Readers consume a record column by column with [`take`](Self::take), so
/// each value is moved out at most once.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    values: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Moves the value at `index` out, leaving `Null` behind. Reading past
    /// the end also yields `Null`.
    pub fn take(&mut self, index: usize) -> Value {
        match self.values.get_mut(index) {
            Some(slot) => slot.take(),
            None => Value::Null,
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for ValueRecord {
    fn from(values: Vec<Value>) -> Self {
        Self::from_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_leaves_null() {
        let mut record = ValueRecord::from_vec(vec![Value::I32(1), Value::from("a")]);

        assert_eq!(record.take(1), Value::from("a"));
        assert_eq!(record.get(1), Some(&Value::Null));
        assert_eq!(record.take(5), Value::Null);
        assert_eq!(record.len(), 2);
    }
}
