//! Load and ranking parameters.

/// Number of attributes shown when the caller does not ask for a count.
pub const DEFAULT_TOP_N: usize = 5;

/// How the loader maps table columns onto survey roles.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Categorical column matched by the ethnicity filter (default: "Ethnicity")
    pub ethnicity_column: String,

    /// Categorical column matched by the gender filter (default: "Gender")
    pub gender_column: String,

    /// Integer column matched by the age range (default: "Age")
    pub age_column: String,

    /// Bookkeeping columns that never become attributes
    /// (default: "id", "Age Category")
    pub ignored_columns: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            ethnicity_column: "Ethnicity".to_string(),
            gender_column: "Gender".to_string(),
            age_column: "Age".to_string(),
            ignored_columns: vec!["id".to_string(), "Age Category".to_string()],
        }
    }
}

impl LoadOptions {
    /// Whether `column` is a role column or explicitly ignored, i.e. can
    /// never be an attribute.
    pub fn is_reserved(&self, column: &str) -> bool {
        column == self.ethnicity_column
            || column == self.gender_column
            || column == self.age_column
            || self.ignored_columns.iter().any(|c| c == column)
    }
}
