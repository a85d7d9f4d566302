//! Runtime value representation
//!
//! This module defines the [`Value`] enum, a small tagged value model used by the
//! scenarios that need something to dereference, index, or cast. Every access is
//! checked: instead of undefined behavior, a bad access returns the [`Fault`] the
//! scenario wants to demonstrate.
//!
//! # Value Types
//!
//! - [`Value::Int`]: 32-bit signed integer
//! - [`Value::Text`]: owned string
//! - [`Value::Array`]: fixed-size array of values
//! - [`Value::Object`]: an opaque instance of a named class
//! - [`Value::Null`]: an unset reference

pub mod registry;

use crate::fault::Fault;
use std::fmt;

/// Runtime values
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Int(i32),
    Text(String),
    Array(Vec<Value>),
    Object { class: String },
    #[default]
    Null,
}

impl Value {
    /// Allocate an array of `len` zero integers
    pub fn zeroed_array(len: usize) -> Self {
        Value::Array(vec![Value::Int(0); len])
    }

    /// Name of the value's type, as used in cast diagnostics
    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
            Value::Object { class } => class,
            Value::Null => "null",
        }
    }

    /// Cast to text; anything else (including null) is an invalid cast
    pub fn cast_text(&self) -> Result<&str, Fault> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(Fault::InvalidCast {
                from: other.type_name().to_string(),
                to: "text".to_string(),
            }),
        }
    }

    /// Length of a text or array, reached through the reference named `binding`
    pub fn len(&self, binding: &'static str) -> Result<usize, Fault> {
        match self {
            Value::Text(s) => Ok(s.chars().count()),
            Value::Array(items) => Ok(items.len()),
            Value::Null => Err(Fault::NullReference {
                method: "len",
                binding,
            }),
            other => Err(Fault::InvalidCast {
                from: other.type_name().to_string(),
                to: "text".to_string(),
            }),
        }
    }

    /// Bounds-checked array element
    pub fn index(&self, index: i32) -> Result<&Value, Fault> {
        match self {
            Value::Array(items) => usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .ok_or(Fault::IndexOutOfBounds {
                    index,
                    len: items.len(),
                }),
            other => Err(Fault::InvalidCast {
                from: other.type_name().to_string(),
                to: "array".to_string(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object { class } => write!(f, "{} instance", class),
            Value::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::FaultKind;

    #[test]
    fn test_zeroed_array() {
        let arr = Value::zeroed_array(3);
        assert_eq!(arr.len("arr").unwrap(), 3);
        assert_eq!(arr.index(1).unwrap(), &Value::Int(0));
        assert_eq!(arr.to_string(), "[0, 0, 0]");
    }

    #[test]
    fn test_index_out_of_bounds() {
        let arr = Value::zeroed_array(3);
        let err = arr.index(5).unwrap_err();
        assert_eq!(err.kind(), FaultKind::IndexOutOfBounds);
        assert_eq!(err.to_string(), "Index 5 out of bounds for length 3");

        let err = arr.index(-1).unwrap_err();
        assert_eq!(err.to_string(), "Index -1 out of bounds for length 3");
    }

    #[test]
    fn test_empty_array_rejects_every_index() {
        let arr = Value::zeroed_array(0);
        assert!(arr.index(0).is_err());
    }

    #[test]
    fn test_null_reference() {
        let err = Value::Null.len("text").unwrap_err();
        assert_eq!(err.kind(), FaultKind::NullReference);
        assert_eq!(
            err.to_string(),
            "cannot invoke `len` because `text` is null"
        );
    }

    #[test]
    fn test_invalid_cast() {
        let obj = Value::Object {
            class: "Sample".to_string(),
        };
        let err = obj.cast_text().unwrap_err();
        assert_eq!(err.kind(), FaultKind::InvalidCast);
        assert_eq!(err.to_string(), "`Sample` cannot be cast to `text`");

        assert_eq!(Value::Text("hi".into()).cast_text().unwrap(), "hi");
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert_eq!(Value::default().type_name(), "null");
    }
}
