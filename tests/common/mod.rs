use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Survey of eight responses with three attributes and bookkeeping columns.
pub const SURVEY_CSV: &str = "\
id,Ethnicity,Gender,Age,Age Category,Compensation,Flexibility,Mentorship,Comments
1,Asian,Female,24,18-29,8,6,4,more pay
2,Asian,Male,31,30-39,9,5,3,
3,Black,Female,45,40-49,6,9,7,flexible hours
4,Black,Male,52,50-59,7,4,8,
5,Hispanic,Female,28,18-29,5,8,,remote
6,Hispanic,Female,36,30-39,7,7,6,
7,Asian,Female,41,40-49,10,4,2,
8,Black,Female,29,18-29,6,9,9,
";

pub struct TestEnv {
    _tmp: TempDir,
    pub survey: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_csv(SURVEY_CSV)
    }

    pub fn with_csv(contents: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let survey = tmp.path().join("survey.csv");
        fs::write(&survey, contents).expect("write fixture survey");
        Self { _tmp: tmp, survey }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("factor-rank").expect("binary built");
        cmd.arg(&self.survey);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(args)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
