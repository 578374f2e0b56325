//! Bound values and result targets.
//!
//! [`Value`] is the opaque parameter carried next to the generated SQL; the
//! builder never inspects it beyond counting. [`Target`] names a destination
//! for a projected or RETURNING column.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Timestamp(DateTime<Utc>),
    Uuid(uuid::Uuid),
}

impl Value {
    /// Map a JSON value onto the closest variant.
    ///
    /// Scalars become their native variant; arrays and objects stay JSON.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::Json(other),
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short type name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Json(_) => "json",
            Value::Timestamp(_) => "timestamp",
            Value::Uuid(_) => "uuid",
        }
    }
}

/// Literal-style rendering, for display only. Never spliced into SQL.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Bytes(b) => {
                f.write_str("X'")?;
                for byte in b {
                    write!(f, "{byte:02X}")?;
                }
                f.write_str("'")
            }
            Value::Json(j) => write!(f, "'{}'", j.to_string().replace('\'', "''")),
            Value::Timestamp(t) => write!(f, "'{}'", t.to_rfc3339()),
            Value::Uuid(u) => write!(f, "'{u}'"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Destination for a projected (SELECT) or returned (RETURNING) column.
///
/// Only the order and number of targets matter to generation; the name lets
/// the caller route row values to the right place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Target(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Target::new(name)
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Target(name)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "postgres")]
mod pg {
    use super::Value;
    use bytes::BytesMut;
    use std::error::Error;
    use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

    impl ToSql for Value {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match self {
                Value::Null => Ok(IsNull::Yes),
                Value::Bool(v) => v.to_sql_checked(ty, out),
                Value::Int(v) => {
                    if *ty == Type::INT2 {
                        i16::try_from(*v)?.to_sql_checked(ty, out)
                    } else if *ty == Type::INT4 {
                        i32::try_from(*v)?.to_sql_checked(ty, out)
                    } else {
                        v.to_sql_checked(ty, out)
                    }
                }
                Value::Float(v) => {
                    if *ty == Type::FLOAT4 {
                        narrow_f32(*v)?.to_sql_checked(ty, out)
                    } else {
                        v.to_sql_checked(ty, out)
                    }
                }
                Value::Text(v) => v.to_sql_checked(ty, out),
                Value::Bytes(v) => v.to_sql_checked(ty, out),
                Value::Json(v) => v.to_sql_checked(ty, out),
                Value::Timestamp(v) => v.to_sql_checked(ty, out),
                Value::Uuid(v) => v.to_sql_checked(ty, out),
            }
        }

        // Per-variant acceptance is checked in `to_sql`.
        fn accepts(_ty: &Type) -> bool {
            true
        }

        to_sql_checked!();
    }

    /// FLOAT4 binding: rejects finite values outside the `f32` range.
    /// Precision beyond `f32` is rounded, as any FLOAT4 column would.
    pub(super) fn narrow_f32(v: f64) -> Result<f32, Box<dyn Error + Sync + Send>> {
        if v.is_finite() && v.abs() > f64::from(f32::MAX) {
            return Err(format!("value {v} out of range for FLOAT4").into());
        }
        Ok(v as f32)
    }

}
