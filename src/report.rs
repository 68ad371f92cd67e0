use std::collections::BTreeSet;

use serde::Serialize;

use crate::data::filter::{ALL, AgeRange, FilterSpec};
use crate::data::model::SurveyDataset;
use crate::ranking::RankingResult;

// ---------------------------------------------------------------------------
// Ranking report – what a front end shows for one selection
// ---------------------------------------------------------------------------

/// A ranking together with the selection that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub ethnicity: String,
    pub gender: String,
    pub age_range: AgeRange,
    pub ranking: RankingResult,
}

impl RankingReport {
    pub fn new(spec: &FilterSpec, ranking: RankingResult) -> Self {
        Self {
            ethnicity: spec.ethnicity.to_string(),
            gender: spec.gender.to_string(),
            age_range: spec.age_range,
            ranking,
        }
    }

    /// e.g. `Top Five Attributes for Female aged 25-40 Asian`. The count
    /// word is the number of attributes shown, so a clamped ranking of three
    /// reads `Top Three ...`.
    pub fn heading(&self) -> String {
        format!(
            "Top {} Attributes for {} aged {}-{} {}",
            count_word(self.ranking.len()),
            self.gender,
            self.age_range.min,
            self.age_range.max,
            self.ethnicity
        )
    }

    /// Heading followed by one numbered line per attribute, starting at 1.
    pub fn render_text(&self) -> String {
        let mut out = self.heading();
        out.push('\n');
        for (i, attr) in self.ranking.iter().enumerate() {
            out.push_str(&format!("{}. {}: {:.1}\n", i + 1, attr.name, attr.score));
        }
        out
    }
}

/// Echo of the selected age range.
pub fn age_range_label(range: &AgeRange) -> String {
    format!("Selected Age Range: {range}")
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 10] = [
        "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    ];
    match n {
        1..=10 => WORDS[n - 1].to_string(),
        _ => n.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Selection options – the choices a front end offers
// ---------------------------------------------------------------------------

/// Values a user can pick from: every category present plus "All", and the
/// age span a range control should cover.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOptions {
    pub ethnicities: Vec<String>,
    pub genders: Vec<String>,
    pub age_bounds: Option<AgeRange>,
}

impl SelectionOptions {
    pub fn from_dataset(dataset: &SurveyDataset) -> Self {
        let with_all = |values: &BTreeSet<String>| -> Vec<String> {
            values
                .iter()
                .cloned()
                .chain(std::iter::once(ALL.to_string()))
                .collect()
        };
        Self {
            ethnicities: with_all(dataset.ethnicities()),
            genders: with_all(dataset.genders()),
            age_bounds: dataset.age_bounds(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Ethnicity: {}\n", self.ethnicities.join(", ")));
        out.push_str(&format!("Gender: {}\n", self.genders.join(", ")));
        match &self.age_bounds {
            Some(range) => out.push_str(&format!("Age: {range}\n")),
            None => out.push_str("Age: <no records>\n"),
        }
        out
    }
}
