//! Data models for normalized record tables.
//!
//! A [`Table`] is the language-agnostic shape every input is reduced to before
//! comparison: a type label, an ordered column list, and rows of [`Value`]s
//! aligned positionally to those columns.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single field value.
///
/// Equality is structural: lists compare element by element and maps compare
/// by key set and contents, independent of insertion order. Variants never
/// compare equal across kinds, so `Int(1) != Float(1.0)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::Bytes(bytes) => {
                f.write_str("0x")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! value_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! value_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(v as u64)
            }
        })*
    };
}

value_from_signed!(i8, i16, i32, i64, isize);
value_from_unsigned!(u8, u16, u32, u64, usize);

/// Goes through the shortest decimal form, so `0.1f32` becomes `0.1f64`
/// rather than `0.10000000149011612`.
impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(v: BTreeMap<String, T>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// One record's values, positionally aligned to a table's columns.
pub type Row = Vec<Value>;

/// A named, column-labelled collection of rows submitted for comparison.
///
/// Rows are not required to match the column count; comparison treats a
/// missing trailing value as never equal to anything.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Builder: replace the rows.
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build a [`Row`] from heterogeneous values.
///
/// ```
/// use datadiff_core::{row, Value};
///
/// let r = row!["Alice", 30];
/// assert_eq!(r, vec![Value::from("Alice"), Value::from(30)]);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structural_equality() {
        let a = Value::from(vec![1, 2, 3]);
        let b = Value::from(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, Value::from(vec![1, 2]));

        let mut left = BTreeMap::new();
        left.insert("x".to_string(), 1);
        left.insert("y".to_string(), 2);
        let mut right = BTreeMap::new();
        right.insert("y".to_string(), 2);
        right.insert("x".to_string(), 1);
        assert_eq!(Value::from(left), Value::from(right));
    }

    #[test]
    fn test_kinds_never_cross_compare() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Int(1), Value::UInt(1));
        assert_ne!(Value::Null, Value::from(""));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(json!(30)), Value::Int(30));
        assert_eq!(Value::from(json!(-4)), Value::Int(-4));
        assert_eq!(Value::from(json!(u64::MAX)), Value::UInt(u64::MAX));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
    }

    #[test]
    fn test_f32_matches_json_decimal() {
        assert_eq!(Value::from(0.1f32), Value::from(json!(0.1)));
        assert_eq!(Value::from(2.5f32), Value::Float(2.5));
        assert_eq!(Value::from(f32::INFINITY), Value::Float(f64::INFINITY));
    }

    #[test]
    fn test_from_json_nested() {
        let value = Value::from(json!({"tags": ["a", "b"], "ok": true}));
        let Value::Map(map) = value else {
            panic!("expected map");
        };
        assert_eq!(map["tags"], Value::from(vec!["a", "b"]));
        assert_eq!(map["ok"], Value::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("Alice").to_string(), "Alice");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::Bytes(vec![0xde, 0xad]).to_string(), "0xdead");
        assert_eq!(
            Value::from(json!({"b": 2, "a": 1})).to_string(),
            "{a: 1, b: 2}"
        );
    }

    #[test]
    fn test_row_macro() {
        let r = row!["Bob", 25, true];
        assert_eq!(
            r,
            vec![Value::from("Bob"), Value::Int(25), Value::Bool(true)]
        );
    }

    #[test]
    fn test_table_builder() {
        let mut table = Table::new("Person", vec!["Name".into(), "Age".into()]);
        assert!(table.is_empty());
        table.push_row(row!["Alice", 30]);
        assert_eq!(table.len(), 1);

        let table = table.with_rows(vec![row!["A", 1], row!["B", 2]]);
        assert_eq!(table.len(), 2);
    }
}
