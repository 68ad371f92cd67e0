/// Data layer: survey types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ SurveyDataset  │  AttributeSchema + Vec<SurveyRecord>
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterSpec → matching indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
