use anyhow::{bail, Result};
use serde_json::Value;

/// Typed conversion from a JSON value, as used by [`Field::read_from`].
///
/// Conversions are strict on JSON kind: numbers do not coerce to strings,
/// `null` conforms to nothing, and integer narrowing fails out of range.
///
/// [`Field::read_from`]: super::Field::read_from
pub trait FromWire: Sized {
    fn from_wire(value: &Value) -> Result<Self>;
}

/// Typed conversion into a JSON value, as used by record serialization.
pub trait ToWire {
    fn to_wire(&self) -> Value;
}

/// Human-readable name of a JSON value's kind, for conversion errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FromWire for i64 {
    fn from_wire(value: &Value) -> Result<Self> {
        match value.as_i64() {
            Some(n) => Ok(n),
            None => bail!("expected integer, got {}", json_kind(value)),
        }
    }
}

impl FromWire for i32 {
    fn from_wire(value: &Value) -> Result<Self> {
        let wide = i64::from_wire(value)?;
        match i32::try_from(wide) {
            Ok(n) => Ok(n),
            Err(_) => bail!("integer {wide} out of range for 32-bit field"),
        }
    }
}

impl FromWire for f64 {
    fn from_wire(value: &Value) -> Result<Self> {
        match value.as_f64() {
            Some(n) => Ok(n),
            None => bail!("expected number, got {}", json_kind(value)),
        }
    }
}

impl FromWire for bool {
    fn from_wire(value: &Value) -> Result<Self> {
        match value.as_bool() {
            Some(b) => Ok(b),
            None => bail!("expected boolean, got {}", json_kind(value)),
        }
    }
}

impl FromWire for String {
    fn from_wire(value: &Value) -> Result<Self> {
        match value.as_str() {
            Some(s) => Ok(s.to_owned()),
            None => bail!("expected string, got {}", json_kind(value)),
        }
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items.iter().map(T::from_wire).collect(),
            other => bail!("expected array, got {}", json_kind(other)),
        }
    }
}

impl ToWire for i64 {
    fn to_wire(&self) -> Value {
        Value::from(*self)
    }
}

impl ToWire for i32 {
    fn to_wire(&self) -> Value {
        Value::from(*self)
    }
}

impl ToWire for f64 {
    fn to_wire(&self) -> Value {
        Value::from(*self)
    }
}

impl ToWire for bool {
    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToWire for String {
    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(ToWire::to_wire).collect())
    }
}

/// Stamp out the `FromWire`/`ToWire` impls every [`Record`] type shares:
/// an object parses through `Record::from_object`, anything else is a
/// conversion failure, and serialization goes through `Record::to_object`.
///
/// [`Record`]: super::Record
macro_rules! record_wire {
    ($ty:ty) => {
        impl $crate::record::FromWire for $ty {
            fn from_wire(value: &::serde_json::Value) -> ::anyhow::Result<Self> {
                match value {
                    ::serde_json::Value::Object(obj) => {
                        Ok(<$ty as $crate::record::Record>::from_object(obj))
                    }
                    other => ::anyhow::bail!(
                        "expected object, got {}",
                        $crate::record::json_kind(other)
                    ),
                }
            }
        }

        impl $crate::record::ToWire for $ty {
            fn to_wire(&self) -> ::serde_json::Value {
                ::serde_json::Value::Object($crate::record::Record::to_object(self))
            }
        }
    };
}

pub(crate) use record_wire;
