use std::path::PathBuf;

use clap::{Parser, Subcommand};

use factor_rank::LoadOptions;
use factor_rank::config::DEFAULT_TOP_N;
use factor_rank::data::filter::ALL;

#[derive(Parser, Debug)]
#[command(
    name = "factor-rank",
    version,
    about = "Rank the attributes survey respondents care about most"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Column holding respondent ethnicity [default: Ethnicity]")]
    pub ethnicity_column: Option<String>,
    #[arg(long, global = true, help = "Column holding respondent gender [default: Gender]")]
    pub gender_column: Option<String>,
    #[arg(long, global = true, help = "Column holding respondent age [default: Age]")]
    pub age_column: Option<String>,
    #[arg(
        long = "ignore",
        global = true,
        value_name = "COLUMN",
        help = "Extra column to leave out of the attributes (id and Age Category always are)"
    )]
    pub ignored_columns: Vec<String>,
    #[arg(help = "Survey table (.csv, .json, .parquet)")]
    pub file: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank attributes for one selection
    Rank {
        #[arg(long, default_value = ALL)]
        ethnicity: String,
        #[arg(long, default_value = ALL)]
        gender: String,
        #[arg(long, help = "Youngest age included [default: dataset minimum]")]
        min_age: Option<u32>,
        #[arg(long, help = "Oldest age included [default: dataset maximum]")]
        max_age: Option<u32>,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },
    /// List the ethnicities, genders and age span available for filtering
    Options,
    /// List the attribute columns in ranking tie-break order
    Schema,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        let mut options = LoadOptions::default();
        if let Some(col) = &self.ethnicity_column {
            options.ethnicity_column = col.clone();
        }
        if let Some(col) = &self.gender_column {
            options.gender_column = col.clone();
        }
        if let Some(col) = &self.age_column {
            options.age_column = col.clone();
        }
        options
            .ignored_columns
            .extend(self.ignored_columns.iter().cloned());
        options
    }
}
