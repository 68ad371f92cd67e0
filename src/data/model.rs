use std::collections::BTreeSet;
use std::fmt;

use anyhow::{Context, Result, bail};

use super::filter::AgeRange;
use crate::config::LoadOptions;
use crate::error::RankError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the raw table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell as produced by the loaders, before the
/// schema has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as a score. Non-finite floats count as missing;
    /// booleans score 1.0 / 0.0.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Float(v) if v.is_finite() => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Interpret the cell as an age: a non-negative whole number.
    pub fn as_age(&self) -> Option<u32> {
        match self {
            CellValue::Integer(i) => u32::try_from(*i).ok(),
            CellValue::Float(v) if v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64 => {
                Some(*v as u32)
            }
            _ => None,
        }
    }

    /// Null and NaN cells are treated alike: the value is missing.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    fn is_numeric_or_missing(&self) -> bool {
        matches!(
            self,
            CellValue::Integer(_) | CellValue::Float(_) | CellValue::Bool(_) | CellValue::Null
        )
    }
}

// ---------------------------------------------------------------------------
// RawTable – loader output
// ---------------------------------------------------------------------------

static NULL_CELL: CellValue = CellValue::Null;

/// Column type as declared by a typed file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Header names plus rows of cells. Rows may be shorter than the header
/// list; absent trailing cells read as [`CellValue::Null`].
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// One kind per header when the source format carries column types
    /// (Parquet). `None` means the kinds are inferred from the cells.
    pub declared_kinds: Option<Vec<ColumnKind>>,
}

impl RawTable {
    fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows[row].get(col).unwrap_or(&NULL_CELL)
    }

    /// Declared kind if known, otherwise inferred from the cells. A column
    /// with no rows to inspect is text.
    fn column_kind(&self, col: usize) -> ColumnKind {
        if let Some(kind) = self.declared_kinds.as_ref().and_then(|k| k.get(col)) {
            return *kind;
        }
        if self.rows.is_empty() {
            return ColumnKind::Text;
        }
        let numeric = (0..self.rows.len()).all(|row| self.cell(row, col).is_numeric_or_missing());
        if numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("missing required column '{name}'"))
    }
}

// ---------------------------------------------------------------------------
// AttributeSchema – ordered attribute names
// ---------------------------------------------------------------------------

/// The ordered list of attribute fields. Order is the table's column order
/// and doubles as the ranking tie-breaker.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSchema {
    attributes: Vec<String>,
}

impl AttributeSchema {
    /// Rejects an empty attribute list.
    pub fn new(attributes: Vec<String>) -> crate::error::Result<Self> {
        if attributes.is_empty() {
            return Err(RankError::Schema(
                "dataset has no numeric attribute columns".to_string(),
            ));
        }
        Ok(Self { attributes })
    }

    pub fn names(&self) -> &[String] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Never true for a schema built with [`AttributeSchema::new`].
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SurveyRecord – one survey response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    pub ethnicity: String,
    pub gender: String,
    pub age: u32,
    /// One entry per schema attribute, `None` where the respondent gave no
    /// score.
    pub scores: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// SurveyDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded survey table with its schema and pre-computed value indices.
/// Read-only once built.
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    pub schema: AttributeSchema,
    pub records: Vec<SurveyRecord>,
    ethnicities: BTreeSet<String>,
    genders: BTreeSet<String>,
}

impl SurveyDataset {
    /// Build a dataset from already-typed records. Every record must carry
    /// exactly one score slot per attribute.
    pub fn new(
        schema: AttributeSchema,
        records: Vec<SurveyRecord>,
    ) -> crate::error::Result<Self> {
        if let Some((i, rec)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.scores.len() != schema.len())
        {
            return Err(RankError::Schema(format!(
                "record {i} has {} scores but the schema has {} attributes",
                rec.scores.len(),
                schema.len()
            )));
        }

        let ethnicities = records.iter().map(|r| r.ethnicity.clone()).collect();
        let genders = records.iter().map(|r| r.gender.clone()).collect();

        Ok(SurveyDataset {
            schema,
            records,
            ethnicities,
            genders,
        })
    }

    /// Resolve a raw table into a typed dataset.
    ///
    /// Attribute columns are the columns that are neither role columns nor
    /// ignored, and that are numeric: declared so by the file format, or
    /// with every cell a number, boolean or missing. Text columns are
    /// skipped.
    pub fn from_table(table: RawTable, options: &LoadOptions) -> Result<Self> {
        let eth_idx = table.column_index(&options.ethnicity_column)?;
        let gender_idx = table.column_index(&options.gender_column)?;
        let age_idx = table.column_index(&options.age_column)?;

        let mut attr_cols: Vec<(usize, String)> = Vec::new();
        for (col, name) in table.headers.iter().enumerate() {
            if options.is_reserved(name) {
                continue;
            }
            if table.column_kind(col) == ColumnKind::Numeric {
                attr_cols.push((col, name.clone()));
            } else {
                log::debug!("Skipping non-numeric column '{name}'");
            }
        }

        let schema = AttributeSchema::new(attr_cols.iter().map(|(_, n)| n.clone()).collect())?;

        let mut records = Vec::with_capacity(table.rows.len());
        for row in 0..table.rows.len() {
            let ethnicity = category(table.cell(row, eth_idx), row, &options.ethnicity_column)?;
            let gender = category(table.cell(row, gender_idx), row, &options.gender_column)?;

            let age_cell = table.cell(row, age_idx);
            let Some(age) = age_cell.as_age() else {
                bail!(
                    "Row {row}: '{}' value {age_cell} is not a non-negative integer",
                    options.age_column
                );
            };

            let scores = attr_cols
                .iter()
                .map(|(col, _)| table.cell(row, *col).as_f64())
                .collect();

            records.push(SurveyRecord {
                ethnicity,
                gender,
                age,
                scores,
            });
        }

        Ok(Self::new(schema, records)?)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The youngest and oldest age present, or `None` for an empty dataset.
    pub fn age_bounds(&self) -> Option<AgeRange> {
        let min = self.records.iter().map(|r| r.age).min()?;
        let max = self.records.iter().map(|r| r.age).max()?;
        Some(AgeRange { min, max })
    }

    /// Sorted distinct ethnicity values.
    pub fn ethnicities(&self) -> &BTreeSet<String> {
        &self.ethnicities
    }

    /// Sorted distinct gender values.
    pub fn genders(&self) -> &BTreeSet<String> {
        &self.genders
    }
}

fn category(cell: &CellValue, row: usize, column: &str) -> Result<String> {
    if cell.is_missing() {
        bail!("Row {row}: '{column}' is empty");
    }
    Ok(cell.to_string())
}
