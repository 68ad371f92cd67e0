//! factor-rank — ranks survey attributes by normalised mean score for a
//! demographic selection.
//!
//! Load a table once with [`data::loader::load_file`], then call
//! [`ranking::rank`] for each selection. The dataset is never mutated, so a
//! shared reference can serve any number of concurrent queries.

pub mod config;
pub mod data;
pub mod error;
pub mod ranking;
pub mod report;

pub use config::{DEFAULT_TOP_N, LoadOptions};
pub use data::filter::{AgeRange, FilterSpec, Selection};
pub use data::model::{AttributeSchema, SurveyDataset, SurveyRecord};
pub use error::RankError;
pub use ranking::{RankedAttribute, RankingResult, rank};
