use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::error::{EtlError, Result};

/// Tabular view of a nested JSON payload: ordered column names plus one row
/// of JSON values per record. Columns are named by the dotted path of each
/// leaf scalar; rows missing a column hold `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Flatten `json_data` into a table. With a `record_path` (dotted), the
    /// value at that path must be the array of row-records to flatten;
    /// without one, an array flattens element-wise and a lone object becomes
    /// a single row.
    pub fn from_value(json_data: &Value, record_path: Option<&str>) -> Result<Self> {
        match record_path {
            Some(path) => match navigate(json_data, path)? {
                Value::Array(items) => Self::from_objects(items),
                other => Err(EtlError::Table {
                    message: format!(
                        "record path '{path}' points at {}, expected an array",
                        type_name(other)
                    ),
                }),
            },
            None => match json_data {
                Value::Array(items) => Self::from_objects(items),
                Value::Object(_) => Self::from_objects(std::slice::from_ref(json_data)),
                other => Err(EtlError::Table {
                    message: format!(
                        "expected an object or an array of objects, got {}",
                        type_name(other)
                    ),
                }),
            },
        }
    }

    /// Build a table from typed records, e.g. extractor output headed for
    /// the sink. Column order follows field declaration order.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self> {
        let value = serde_json::to_value(records)?;
        Self::from_value(&value, None)
    }

    fn from_objects(items: &[Value]) -> Result<Self> {
        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut flat_rows: Vec<Vec<(String, Value)>> = Vec::with_capacity(items.len());

        for item in items {
            let record = item.as_object().ok_or_else(|| EtlError::Table {
                message: format!("row records must be objects, got {}", type_name(item)),
            })?;
            let mut flat = Vec::new();
            flatten_object("", record, &mut flat);
            for (name, _) in &flat {
                if !index.contains_key(name) {
                    index.insert(name.clone(), columns.len());
                    columns.push(name.clone());
                }
            }
            flat_rows.push(flat);
        }

        let mut rows = Vec::with_capacity(flat_rows.len());
        for flat in flat_rows {
            let mut row = vec![Value::Null; columns.len()];
            for (name, value) in flat {
                if let Some(&i) = index.get(&name) {
                    row[i] = value;
                }
            }
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Flattening with the original contract: a shape mismatch logs a message
/// and yields `None` instead of an error.
pub fn build_table(json_data: &Value, record_path: Option<&str>) -> Option<Table> {
    match Table::from_value(json_data, record_path) {
        Ok(table) => Some(table),
        Err(e) => {
            tracing::warn!("data is not in the expected shape: {e}");
            None
        }
    }
}

fn flatten_object(prefix: &str, record: &Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, value) in record {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_object(&name, nested, out),
            other => out.push((name, other.clone())),
        }
    }
}

fn navigate<'a>(data: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = data;
    for key in path.split('.') {
        current = current.get(key).ok_or_else(|| EtlError::Table {
            message: format!("record path segment '{key}' not found"),
        })?;
    }
    Ok(current)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
