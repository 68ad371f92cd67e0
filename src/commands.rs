use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use factor_rank::data::loader::load_file;
use factor_rank::report::{RankingReport, SelectionOptions, age_range_label};
use factor_rank::{AgeRange, FilterSpec, RankError, Selection, SurveyDataset, rank};

use crate::cli::{Cli, Commands};

/// Exit status when the selection has nothing to rank.
const NO_DATA: u8 = 2;

pub fn run(cli: &Cli) -> Result<ExitCode> {
    let dataset = load_file(&cli.file, &cli.load_options())?;

    match &cli.command {
        Commands::Rank {
            ethnicity,
            gender,
            min_age,
            max_age,
            top,
        } => {
            let spec = filter_spec(&dataset, ethnicity, gender, *min_age, *max_age)?;
            match rank(&dataset, &spec, *top) {
                Ok(ranking) => {
                    let report = RankingReport::new(&spec, ranking);
                    if cli.json {
                        print_json(&report)?;
                    } else {
                        print!("{}", report.render_text());
                        println!("{}", age_range_label(&spec.age_range));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e @ (RankError::EmptyResult | RankError::DegenerateScale { .. })) => {
                    log::warn!("Nothing to rank: {e}");
                    eprintln!("No data for this selection: {e}");
                    Ok(ExitCode::from(NO_DATA))
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Options => {
            let options = SelectionOptions::from_dataset(&dataset);
            if cli.json {
                print_json(&options)?;
            } else {
                print!("{}", options.render_text());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Schema => {
            let names = dataset.schema.names();
            if cli.json {
                print_json(&names)?;
            } else {
                for name in names {
                    println!("{name}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Missing age bounds fall back to the dataset's own span.
fn filter_spec(
    dataset: &SurveyDataset,
    ethnicity: &str,
    gender: &str,
    min_age: Option<u32>,
    max_age: Option<u32>,
) -> Result<FilterSpec> {
    let bounds = FilterSpec::all(dataset).age_range;
    let age_range = AgeRange::new(min_age.unwrap_or(bounds.min), max_age.unwrap_or(bounds.max))
        .context("invalid --min-age/--max-age")?;
    Ok(FilterSpec {
        ethnicity: Selection::from(ethnicity),
        gender: Selection::from(gender),
        age_range,
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}
