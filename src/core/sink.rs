use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use serde_json::Value;

use crate::core::table::Table;
use crate::utils::error::{EtlError, Result};

const HIVE_NULL_PARTITION: &str = "__HIVE_DEFAULT_PARTITION__";

/// Write `table` as Parquet, creating parent directories as needed.
///
/// Without `partition_cols` a single file is written at `output_path`. With
/// them, `output_path` is a directory root and rows are split into a
/// Hive-style `col=value/.../part-0.parquet` layout, the partition columns
/// dropped from the files themselves.
///
/// Unlike the extractors, sink failures are not swallowed: disk and encoder
/// errors come back as `Err`.
pub fn save_to_parquet<P: AsRef<Path>>(
    table: &Table,
    output_path: P,
    partition_cols: Option<&[&str]>,
) -> Result<()> {
    let output_path = output_path.as_ref();
    match partition_cols {
        Some(cols) if !cols.is_empty() => save_partitioned(table, output_path, cols),
        _ => {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let rows: Vec<Vec<Option<String>>> = table
                .rows()
                .iter()
                .map(|row| row.iter().map(render_cell).collect())
                .collect();
            write_parquet_file(table.columns(), &rows, output_path)
        }
    }
}

fn save_partitioned(table: &Table, root: &Path, partition_cols: &[&str]) -> Result<()> {
    let partition_idx = partition_cols
        .iter()
        .map(|col| {
            table.column_index(col).ok_or_else(|| EtlError::Table {
                message: format!("unknown partition column '{col}'"),
            })
        })
        .collect::<Result<Vec<usize>>>()?;
    let data_idx: Vec<usize> =
        (0..table.num_columns()).filter(|i| !partition_idx.contains(i)).collect();
    let data_columns: Vec<String> =
        data_idx.iter().map(|&i| table.columns()[i].clone()).collect();

    // group rows by partition key, keeping first-seen key order
    let mut groups: Vec<(Vec<String>, Vec<Vec<Option<String>>>)> = Vec::new();
    for row in table.rows() {
        let key: Vec<String> = partition_idx
            .iter()
            .map(|&i| render_cell(&row[i]).unwrap_or_else(|| HIVE_NULL_PARTITION.to_string()))
            .collect();
        let data_row: Vec<Option<String>> = data_idx.iter().map(|&i| render_cell(&row[i])).collect();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, rows)) => rows.push(data_row),
            None => groups.push((key, vec![data_row])),
        }
    }

    fs::create_dir_all(root)?;
    for (key, rows) in &groups {
        let mut dir = root.to_path_buf();
        for (col, value) in partition_cols.iter().zip(key) {
            dir.push(format!("{col}={value}"));
        }
        fs::create_dir_all(&dir)?;
        write_parquet_file(&data_columns, rows, &dir.join("part-0.parquet"))?;
    }
    Ok(())
}

fn write_parquet_file(columns: &[String], rows: &[Vec<Option<String>>], path: &Path) -> Result<()> {
    if columns.is_empty() {
        return Err(EtlError::Table {
            message: "cannot save a table with no columns".to_string(),
        });
    }

    let fields: Vec<Field> = columns
        .iter()
        .map(|name| Field::new(name, DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let arrays: Vec<ArrayRef> = (0..columns.len())
        .map(|col| {
            let values: Vec<Option<String>> = rows.iter().map(|row| row[col].clone()).collect();
            Arc::new(StringArray::from(values)) as ArrayRef
        })
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, Some(WriterProperties::builder().build()))?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

/// Null stays null; strings pass through; other scalars and nested arrays
/// keep their JSON rendering.
fn render_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
