//! Per-attribute means over a filtered subset.

use crate::data::model::SurveyDataset;

/// Arithmetic mean of every attribute across the records at `indices`.
///
/// Missing scores are excluded from their attribute's mean rather than
/// counted as zero. An attribute with no observed score in the subset has no
/// mean (`None`). Output order follows the schema.
pub fn mean_scores(dataset: &SurveyDataset, indices: &[usize]) -> Vec<Option<f64>> {
    let n_attrs = dataset.schema.len();
    let mut sums = vec![0.0f64; n_attrs];
    let mut counts = vec![0usize; n_attrs];

    for &i in indices {
        for (attr, score) in dataset.records[i].scores.iter().enumerate() {
            if let Some(v) = score {
                sums[attr] += v;
                counts[attr] += 1;
            }
        }
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| (count > 0).then(|| sum / count as f64))
        .collect()
}
