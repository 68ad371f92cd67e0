//! Ranking engine: filter → aggregate → rescale → rank.
//!
//! ```text
//!  SurveyDataset + FilterSpec
//!        │
//!        ▼
//!   filtered_indices   records passing all three predicates
//!        │
//!        ▼
//!   aggregate          per-attribute mean, missing values excluded
//!        │
//!        ▼
//!   rescale            mean * (100 / max mean of this subset)
//!        │
//!        ▼
//!   stable sort desc, take top_n
//! ```
//!
//! Every call is a pure function of its inputs; the dataset is only borrowed.

pub mod aggregate;
pub mod rescale;

use serde::Serialize;

use crate::data::filter::{FilterSpec, filtered_indices};
use crate::data::model::SurveyDataset;
use crate::error::{RankError, Result};

use aggregate::mean_scores;
use rescale::rescale_to_max;

/// One entry of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAttribute {
    pub name: String,
    /// Rescaled mean, 100.0 for the best attribute of the subset.
    pub score: f64,
}

/// Attributes in rank order (index 0 is rank 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult {
    pub attributes: Vec<RankedAttribute>,
    /// Number of records that passed the filter.
    pub matched_records: usize,
}

impl RankingResult {
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedAttribute> {
        self.attributes.iter()
    }
}

/// Rank the dataset's attributes for the records matching `spec`.
///
/// Returns at most `top_n` attributes ordered by descending score; equal
/// scores keep schema order. Attributes nobody in the subset scored are left
/// out.
pub fn rank(dataset: &SurveyDataset, spec: &FilterSpec, top_n: usize) -> Result<RankingResult> {
    if top_n == 0 {
        return Err(RankError::ZeroTopN);
    }

    let indices = filtered_indices(dataset, spec);
    log::debug!(
        "{} of {} records match ethnicity={} gender={} age={}",
        indices.len(),
        dataset.len(),
        spec.ethnicity,
        spec.gender,
        spec.age_range
    );
    if indices.is_empty() {
        return Err(RankError::EmptyResult);
    }

    let means = mean_scores(dataset, &indices);
    let scores = rescale_to_max(&means)?;

    let mut ranked: Vec<RankedAttribute> = dataset
        .schema
        .names()
        .iter()
        .zip(scores)
        .filter_map(|(name, score)| match score {
            Some(score) => Some(RankedAttribute {
                name: name.clone(),
                score,
            }),
            None => {
                log::debug!("Attribute '{name}' has no scores in this selection");
                None
            }
        })
        .collect();

    // sort_by is stable: ties keep schema order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_n);

    Ok(RankingResult {
        attributes: ranked,
        matched_records: indices.len(),
    })
}
