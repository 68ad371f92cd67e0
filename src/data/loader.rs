use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{
    DataType, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type, Int64Type, UInt8Type,
    UInt16Type, UInt32Type, UInt64Type,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, ColumnKind, RawTable, SurveyDataset};
use crate::config::LoadOptions;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a survey dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – flat Parquet table, one column per field
/// * `.json`    – `[{ "Ethnicity": "...", "Age": 31, "Compensation": 4.0, ... }, ...]`
/// * `.csv`     – header row followed by one response per line
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<SurveyDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    let dataset = SurveyDataset::from_table(table, options)
        .with_context(|| format!("resolving schema of {}", path.display()))?;

    log::info!(
        "Loaded {} responses with attributes {:?}",
        dataset.len(),
        dataset.schema.names()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "id": 1, "Ethnicity": "Asian", "Gender": "Female", "Age": 31,
///     "Compensation": 4.0, "Flexibility": 3.5 },
///   ...
/// ]
/// ```
///
/// Column order follows first appearance; keys missing from a record are null.
pub fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut table = RawTable::default();
    let mut objects = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !table.headers.contains(key) {
                table.headers.push(key.clone());
            }
        }
        objects.push(obj);
    }

    for obj in objects {
        let row = table
            .headers
            .iter()
            .map(|h| obj.get(h).map(json_to_cell).unwrap_or(CellValue::Null))
            .collect();
        table.rows.push(row);
    }

    Ok(table)
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:  header row with column names, one survey response per row.
/// Empty cells and the usual NA spellings (`NA`, `N/A`, `null`, ...) are
/// missing values.
pub fn load_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(RawTable {
        headers,
        rows,
        declared_kinds: None,
    })
}

/// Tokens read as a missing value, matching `pandas.read_csv` defaults.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() || NA_TOKENS.contains(&s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    match s {
        "True" | "true" | "TRUE" => return CellValue::Bool(true),
        "False" | "false" | "FALSE" => return CellValue::Bool(false),
        _ => {}
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet table.
///
/// Integer, float, boolean and string columns are supported. Works with
/// files written by both **Pandas** (`df.to_parquet()`) and **Polars**
/// (`df.write_parquet()`).
pub fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let declared_kinds = builder
        .schema()
        .fields()
        .iter()
        .map(|f| column_kind(f.data_type()))
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = rows.len();

        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .zip(&headers)
                .map(|(col, name)| {
                    extract_cell_value(col, row)
                        .with_context(|| format!("Row {}: column '{name}'", offset + row))
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(cells);
        }
    }

    Ok(RawTable {
        headers,
        rows,
        declared_kinds: Some(declared_kinds),
    })
}

// -- Parquet / Arrow helpers --

fn column_kind(data_type: &DataType) -> ColumnKind {
    if data_type.is_numeric() || *data_type == DataType::Boolean {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell_value(col: &ArrayRef, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let value = match col.data_type() {
        DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int8 => CellValue::Integer(col.as_primitive::<Int8Type>().value(row).into()),
        DataType::Int16 => CellValue::Integer(col.as_primitive::<Int16Type>().value(row).into()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row).into()),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::UInt8 => CellValue::Integer(col.as_primitive::<UInt8Type>().value(row).into()),
        DataType::UInt16 => CellValue::Integer(col.as_primitive::<UInt16Type>().value(row).into()),
        DataType::UInt32 => CellValue::Integer(col.as_primitive::<UInt32Type>().value(row).into()),
        DataType::UInt64 => {
            let v = col.as_primitive::<UInt64Type>().value(row);
            CellValue::Integer(i64::try_from(v).context("UInt64 value out of range")?)
        }
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row).into()),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        other => bail!("unsupported column type {other:?}"),
    };
    Ok(value)
}
