//! Turning record collections into [`Table`]s.
//!
//! Two sources are supported: Rust record types that implement [`Tabular`]
//! (usually through the [`tabular!`](crate::tabular) macro), and JSON arrays
//! of objects.

use crate::error::ExtractError;
use crate::types::{Row, Table, Value};

/// Schema description for a record type.
///
/// Implementors declare a type label and an ordered column list, and produce
/// one value per column for each instance.
pub trait Tabular {
    /// Label used in reports, e.g. `Person`.
    fn type_name() -> &'static str;

    /// Column names in declaration order.
    fn columns() -> Vec<&'static str>;

    /// This record's values, aligned to [`Tabular::columns`].
    fn values(&self) -> Row;
}

/// Implement [`Tabular`] for a struct by listing the fields to compare.
///
/// Field values are cloned and converted with `Value::from`, so every listed
/// field's type needs an `Into<Value>` conversion.
///
/// ```
/// use datadiff_core::{tabular, Tabular};
///
/// #[derive(Clone)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// tabular!(Person { name, age });
///
/// assert_eq!(Person::columns(), vec!["name", "age"]);
/// ```
#[macro_export]
macro_rules! tabular {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Tabular for $ty {
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            fn columns() -> Vec<&'static str> {
                vec![$(stringify!($field)),*]
            }

            fn values(&self) -> $crate::Row {
                vec![$($crate::Value::from(self.$field.clone())),*]
            }
        }
    };
}

impl Table {
    /// Extract a table from a slice of records.
    ///
    /// Fails when the record type declares no columns.
    pub fn from_records<T: Tabular>(records: &[T]) -> Result<Table, ExtractError> {
        let columns: Vec<String> = T::columns().into_iter().map(String::from).collect();
        if columns.is_empty() {
            return Err(ExtractError::NoColumns {
                type_name: T::type_name().to_string(),
            });
        }

        let rows = records.iter().map(T::values).collect();
        Ok(Table::new(T::type_name(), columns).with_rows(rows))
    }

    /// Extract a table from a JSON array of objects.
    ///
    /// Columns follow the key order of the first object, and every other
    /// object must carry exactly the same keys. An empty array yields a table
    /// with no columns, which comparison resolves against the other side.
    pub fn from_json(name: &str, json: &serde_json::Value) -> Result<Table, ExtractError> {
        let elements = match json {
            serde_json::Value::Null => return Err(ExtractError::NullInput),
            serde_json::Value::Array(elements) => elements,
            other => {
                return Err(ExtractError::NotAnArray {
                    found: json_kind(other).to_string(),
                })
            }
        };

        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(elements.len());

        for (index, element) in elements.iter().enumerate() {
            let serde_json::Value::Object(object) = element else {
                return Err(ExtractError::NotARecord {
                    index,
                    found: json_kind(element).to_string(),
                });
            };

            if index == 0 {
                columns = object.keys().cloned().collect();
                if columns.is_empty() {
                    return Err(ExtractError::NoColumns {
                        type_name: name.to_string(),
                    });
                }
            } else if object.len() != columns.len()
                || !columns.iter().all(|c| object.contains_key(c))
            {
                return Err(ExtractError::Heterogeneous { index });
            }

            let row: Row = columns
                .iter()
                .map(|c| object.get(c).cloned().map(Value::from).unwrap_or(Value::Null))
                .collect();
            rows.push(row);
        }

        tracing::debug!(
            table = name,
            columns = columns.len(),
            rows = rows.len(),
            "Extracted table from JSON"
        );

        Ok(Table::new(name, columns).with_rows(rows))
    }

    /// Reorder this table's columns, and every row with them, to follow
    /// `columns`.
    ///
    /// Column order in JSON objects carries no meaning, so tables read from
    /// separate documents are aligned by name before a positional compare.
    /// A table with no columns, or an empty `columns`, is returned as-is.
    /// Fails with [`ExtractError::ColumnMismatch`] when the two column sets
    /// differ.
    pub fn align_columns(self, columns: &[String]) -> Result<Table, ExtractError> {
        if self.columns.is_empty() || columns.is_empty() || self.columns == columns {
            return Ok(self);
        }

        let positions: Option<Vec<usize>> = if self.columns.len() == columns.len() {
            columns
                .iter()
                .map(|c| self.columns.iter().position(|own| own == c))
                .collect()
        } else {
            None
        };
        let Some(positions) = positions else {
            return Err(ExtractError::ColumnMismatch {
                expected: columns.join(", "),
                actual: self.columns.join(", "),
            });
        };

        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                positions
                    .iter()
                    .map(|&p| row.get(p).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(Table::new(self.name, columns.to_vec()).with_rows(rows))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;
    use serde_json::json;

    #[derive(Clone)]
    struct Person {
        name: String,
        age: i32,
    }

    crate::tabular!(Person { name, age });

    struct Empty;

    impl Tabular for Empty {
        fn type_name() -> &'static str {
            "Empty"
        }

        fn columns() -> Vec<&'static str> {
            vec![]
        }

        fn values(&self) -> Row {
            vec![]
        }
    }

    fn person(name: &str, age: i32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn test_from_records() {
        let table = Table::from_records(&[person("Alice", 30), person("Bob", 25)]).unwrap();
        assert_eq!(table.name, "Person");
        assert_eq!(table.columns, vec!["name", "age"]);
        assert_eq!(table.rows, vec![row!["Alice", 30], row!["Bob", 25]]);
    }

    #[test]
    fn test_from_records_empty_slice() {
        let table = Table::from_records::<Person>(&[]).unwrap();
        assert_eq!(table.columns.len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_records_no_columns() {
        let err = Table::from_records(&[Empty]).unwrap_err();
        assert_eq!(
            err,
            ExtractError::NoColumns {
                type_name: "Empty".to_string()
            }
        );
    }

    #[test]
    fn test_from_json() {
        let json = json!([
            {"name": "Alice", "age": 30},
            {"age": 25, "name": "Bob"},
        ]);
        let table = Table::from_json("Person", &json).unwrap();
        assert_eq!(table.columns, vec!["name", "age"]);
        assert_eq!(table.rows[1], row!["Bob", 25]);
    }

    #[test]
    fn test_from_json_empty_array() {
        let table = Table::from_json("Person", &json!([])).unwrap();
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_json_errors() {
        assert_eq!(
            Table::from_json("T", &serde_json::Value::Null).unwrap_err(),
            ExtractError::NullInput
        );
        assert_eq!(
            Table::from_json("T", &json!({"a": 1})).unwrap_err(),
            ExtractError::NotAnArray {
                found: "object".to_string()
            }
        );
        assert_eq!(
            Table::from_json("T", &json!([{"a": 1}, 2])).unwrap_err(),
            ExtractError::NotARecord {
                index: 1,
                found: "number".to_string()
            }
        );
        assert_eq!(
            Table::from_json("T", &json!([{}])).unwrap_err(),
            ExtractError::NoColumns {
                type_name: "T".to_string()
            }
        );
    }

    #[test]
    fn test_from_json_heterogeneous() {
        let missing = json!([{"a": 1, "b": 2}, {"a": 1}]);
        assert_eq!(
            Table::from_json("T", &missing).unwrap_err(),
            ExtractError::Heterogeneous { index: 1 }
        );

        let renamed = json!([{"a": 1, "b": 2}, {"a": 1, "c": 2}]);
        assert_eq!(
            Table::from_json("T", &renamed).unwrap_err(),
            ExtractError::Heterogeneous { index: 1 }
        );
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_align_columns_reorders_rows() {
        let table = Table::from_json("Person", &json!([{"age": 30, "name": "Alice"}])).unwrap();
        let aligned = table.align_columns(&columns(&["name", "age"])).unwrap();
        assert_eq!(aligned.columns, vec!["name", "age"]);
        assert_eq!(aligned.rows, vec![row!["Alice", 30]]);
    }

    #[test]
    fn test_align_columns_rejects_different_fields() {
        let table = Table::from_json("T", &json!([{"name": 1, "age": "x"}])).unwrap();
        let err = table
            .align_columns(&columns(&["id", "email"]))
            .unwrap_err();
        assert_eq!(
            err,
            ExtractError::ColumnMismatch {
                expected: "id, email".to_string(),
                actual: "name, age".to_string(),
            }
        );

        let wider = Table::new("T", columns(&["a", "b", "c"]));
        assert!(wider.align_columns(&columns(&["a", "b"])).is_err());
    }

    #[test]
    fn test_align_columns_skips_empty_tables() {
        let empty = Table::from_json("T", &json!([])).unwrap();
        let aligned = empty.clone().align_columns(&columns(&["a"])).unwrap();
        assert_eq!(aligned, empty);

        let table = Table::new("T", columns(&["a"])).with_rows(vec![row![1]]);
        assert_eq!(table.clone().align_columns(&[]).unwrap(), table);
    }
}
