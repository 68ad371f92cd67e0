use std::fmt;

use serde::Serialize;

use super::model::{SurveyDataset, SurveyRecord};
use crate::error::{RankError, Result};

// ---------------------------------------------------------------------------
// Filter predicates: categorical selections and an inclusive age range
// ---------------------------------------------------------------------------

/// Sentinel accepted for categorical filters meaning "no restriction".
pub const ALL: &str = "All";

/// Selection for a categorical column.
///
/// Values are not checked against the dataset: selecting a value nobody
/// reported is legal and simply matches no records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{ALL}"),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

/// Inclusive age bounds, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(RankError::InvalidAgeRange { min, max });
        }
        Ok(AgeRange { min, max })
    }

    pub fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// The full set of constraints narrowing which records are aggregated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub ethnicity: Selection,
    pub gender: Selection,
    pub age_range: AgeRange,
}

impl FilterSpec {
    /// No categorical restriction and the dataset's full age span.
    pub fn all(dataset: &SurveyDataset) -> Self {
        FilterSpec {
            ethnicity: Selection::All,
            gender: Selection::All,
            age_range: dataset.age_bounds().unwrap_or(AgeRange {
                min: 0,
                max: u32::MAX,
            }),
        }
    }

    /// A record passes when it satisfies all three predicates.
    pub fn matches(&self, record: &SurveyRecord) -> bool {
        self.ethnicity.accepts(&record.ethnicity)
            && self.gender.accepts(&record.gender)
            && self.age_range.contains(record.age)
    }
}

/// Return indices of records that pass the filter, in dataset order.
pub fn filtered_indices(dataset: &SurveyDataset, spec: &FilterSpec) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| spec.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AttributeSchema;

    fn record(ethnicity: &str, gender: &str, age: u32) -> SurveyRecord {
        SurveyRecord {
            ethnicity: ethnicity.to_string(),
            gender: gender.to_string(),
            age,
            scores: vec![Some(1.0)],
        }
    }

    fn dataset() -> SurveyDataset {
        SurveyDataset::new(
            AttributeSchema::new(vec!["Pay".into()]).unwrap(),
            vec![
                record("X", "M", 25),
                record("Y", "F", 30),
                record("X", "F", 35),
                record("Z", "M", 50),
            ],
        )
        .unwrap()
    }

    #[test]
    fn all_sentinel_parses() {
        assert_eq!(Selection::from("All"), Selection::All);
        assert_eq!(Selection::from("all"), Selection::Only("all".into()));
        assert_eq!(Selection::from("X").to_string(), "X");
    }

    #[test]
    fn inverted_age_range_is_rejected() {
        assert_eq!(
            AgeRange::new(40, 20),
            Err(RankError::InvalidAgeRange { min: 40, max: 20 })
        );
        assert!(AgeRange::new(30, 30).is_ok());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let range = AgeRange::new(25, 35).unwrap();
        assert!(range.contains(25));
        assert!(range.contains(35));
        assert!(!range.contains(24));
        assert!(!range.contains(36));
    }

    #[test]
    fn all_filter_keeps_every_record() {
        let ds = dataset();
        let spec = FilterSpec::all(&ds);
        assert_eq!(spec.age_range, AgeRange { min: 25, max: 50 });
        assert_eq!(filtered_indices(&ds, &spec), vec![0, 1, 2, 3]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let ds = dataset();
        let spec = FilterSpec {
            ethnicity: Selection::from("X"),
            gender: Selection::from("F"),
            age_range: AgeRange::new(20, 40).unwrap(),
        };
        assert_eq!(filtered_indices(&ds, &spec), vec![2]);
    }

    #[test]
    fn unknown_value_matches_nothing() {
        let ds = dataset();
        let spec = FilterSpec {
            ethnicity: Selection::from("Nobody"),
            ..FilterSpec::all(&ds)
        };
        assert!(filtered_indices(&ds, &spec).is_empty());
    }

    #[test]
    fn every_kept_record_satisfies_the_filter() {
        let ds = dataset();
        let spec = FilterSpec {
            ethnicity: Selection::All,
            gender: Selection::from("M"),
            age_range: AgeRange::new(26, 60).unwrap(),
        };
        let kept = filtered_indices(&ds, &spec);
        assert_eq!(kept, vec![3]);
        for (i, rec) in ds.records.iter().enumerate() {
            assert_eq!(kept.contains(&i), spec.matches(rec));
        }
    }
}
