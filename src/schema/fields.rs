//! Typed accessors over an untyped JSON field bag.
//!
//! A key is treated as absent when it is missing or explicitly `null`. Any other value is
//! present and must satisfy its field's constraint, so `0`, `false` and `""` are never
//! silently dropped.

use crate::foundation::error::{PathElem, ValidationError};
use crate::schema::vocab::{Vocabulary, unknown_member};
use serde_json::{Map, Value};

pub(crate) struct FieldBag<'a> {
    map: &'a Map<String, Value>,
    path: Vec<PathElem>,
}

impl<'a> FieldBag<'a> {
    pub(crate) fn new(value: &'a Value, path: Vec<PathElem>) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(ValidationError::at(
                &path,
                format!("expected an object (got {})", describe(other)),
            )),
        }
    }

    pub(crate) fn child(&self, key: &'static str) -> Vec<PathElem> {
        [self.path.as_slice(), &[PathElem::Field(key)]].concat()
    }

    pub(crate) fn err(&self, key: &'static str, msg: impl Into<String>) -> ValidationError {
        ValidationError::at(&self.child(key), msg)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn require(&self, key: &'static str) -> Result<&'a Value, ValidationError> {
        self.get(key)
            .ok_or_else(|| self.err(key, format!("missing required field \"{key}\"")))
    }

    pub(crate) fn req_str(&self, key: &'static str) -> Result<&'a str, ValidationError> {
        as_str(self.require(key)?, &self.child(key))
    }

    pub(crate) fn opt_str(&self, key: &'static str) -> Result<Option<&'a str>, ValidationError> {
        self.get(key)
            .map(|v| as_str(v, &self.child(key)))
            .transpose()
    }

    pub(crate) fn req_f64(&self, key: &'static str) -> Result<f64, ValidationError> {
        as_f64(self.require(key)?, &self.child(key))
    }

    pub(crate) fn opt_f64(&self, key: &'static str) -> Result<Option<f64>, ValidationError> {
        self.get(key)
            .map(|v| as_f64(v, &self.child(key)))
            .transpose()
    }

    pub(crate) fn opt_bool(&self, key: &'static str) -> Result<Option<bool>, ValidationError> {
        self.get(key)
            .map(|v| {
                v.as_bool().ok_or_else(|| {
                    self.err(key, format!("expected a boolean (got {})", describe(v)))
                })
            })
            .transpose()
    }

    pub(crate) fn req_array(&self, key: &'static str) -> Result<&'a [Value], ValidationError> {
        as_array(self.require(key)?, &self.child(key))
    }

    pub(crate) fn opt_array(
        &self,
        key: &'static str,
    ) -> Result<Option<&'a [Value]>, ValidationError> {
        self.get(key)
            .map(|v| as_array(v, &self.child(key)))
            .transpose()
    }

    /// Fixed-size tuple of numbers, e.g. a frame or a color.
    pub(crate) fn opt_numbers<const N: usize>(
        &self,
        key: &'static str,
    ) -> Result<Option<[f64; N]>, ValidationError> {
        self.get(key)
            .map(|v| as_numbers::<N>(v, &self.child(key)))
            .transpose()
    }

    pub(crate) fn opt_vocab<V: Vocabulary>(
        &self,
        key: &'static str,
    ) -> Result<Option<V>, ValidationError> {
        self.get(key)
            .map(|v| as_vocab::<V>(v, &self.child(key)))
            .transpose()
    }
}

pub(crate) fn as_str<'a>(v: &'a Value, path: &[PathElem]) -> Result<&'a str, ValidationError> {
    v.as_str().ok_or_else(|| {
        ValidationError::at(path, format!("expected a string (got {})", describe(v)))
    })
}

pub(crate) fn as_f64(v: &Value, path: &[PathElem]) -> Result<f64, ValidationError> {
    match v.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::at(
            path,
            format!("expected a number (got {})", describe(v)),
        )),
    }
}

/// A number with no fractional part (`64` and `64.0` both qualify).
pub(crate) fn as_integer(v: &Value, path: &[PathElem]) -> Result<i64, ValidationError> {
    let n = as_f64(v, path)?;
    if n.fract() != 0.0 || n.abs() > i64::MAX as f64 {
        return Err(ValidationError::at(
            path,
            format!("expected an integer (got {n})"),
        ));
    }
    Ok(n as i64)
}

pub(crate) fn as_array<'a>(
    v: &'a Value,
    path: &[PathElem],
) -> Result<&'a [Value], ValidationError> {
    v.as_array().map(Vec::as_slice).ok_or_else(|| {
        ValidationError::at(path, format!("expected an array (got {})", describe(v)))
    })
}

pub(crate) fn as_numbers<const N: usize>(
    v: &Value,
    path: &[PathElem],
) -> Result<[f64; N], ValidationError> {
    let items = as_array(v, path)?;
    if items.len() != N {
        return Err(ValidationError::at(
            path,
            format!("expected exactly {N} numbers (got {})", items.len()),
        ));
    }
    let mut out = [0.0; N];
    for (i, item) in items.iter().enumerate() {
        out[i] = as_f64(item, &[path, &[PathElem::Index(i)]].concat())?;
    }
    Ok(out)
}

pub(crate) fn as_vocab<V: Vocabulary>(v: &Value, path: &[PathElem]) -> Result<V, ValidationError> {
    let s = as_str(v, path)?;
    V::parse(s).ok_or_else(|| ValidationError::at(path, unknown_member::<V>(s)))
}

/// Short type description for rejection messages.
pub(crate) fn describe(v: &Value) -> String {
    match v {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(a) => format!("array of {}", a.len()),
        Value::Object(_) => "object".to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/fields.rs"]
mod tests;
