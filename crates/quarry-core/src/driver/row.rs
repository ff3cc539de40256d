use crate::{query::Value, Error, Result};

/// One row returned by [`Connection::query`](super::Connection::query).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn from_vec(values: Vec<Value>) -> Row {
        Row { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            Error::driver_operation_failed(ColumnOutOfRange {
                index,
                len: self.values.len(),
            })
        })
    }

    /// Reads a text column. `NULL` yields `None`.
    pub fn get_str(&self, index: usize) -> Result<Option<&str>> {
        match self.get(index)? {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value)),
            value => Err(crate::err!("column {index} is not text; value={value:?}")),
        }
    }

    /// Reads an integer column. `NULL` yields `None`.
    pub fn get_i64(&self, index: usize) -> Result<Option<i64>> {
        match self.get(index)? {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(i64::from(*value))),
            value => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| crate::err!("column {index} is not an integer; value={value:?}")),
        }
    }

    /// Reads a flag column. Integers are accepted, non-zero meaning true.
    pub fn get_bool(&self, index: usize) -> Result<bool> {
        match self.get(index)? {
            Value::Bool(value) => Ok(*value),
            Value::Null => Ok(false),
            value => value
                .as_i64()
                .map(|value| value != 0)
                .ok_or_else(|| crate::err!("column {index} is not a flag; value={value:?}")),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

#[derive(Debug)]
struct ColumnOutOfRange {
    index: usize,
    len: usize,
}

impl std::error::Error for ColumnOutOfRange {}

impl core::fmt::Display for ColumnOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "column {} out of range for row of {} columns", self.index, self.len)
    }
}
