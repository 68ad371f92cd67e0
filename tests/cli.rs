mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn ranks_everyone_by_default() {
    TestEnv::new()
        .cmd()
        .arg("rank")
        .assert()
        .success()
        .stdout(contains("Top Three Attributes for All aged 24-52 All"))
        .stdout(contains("1. Compensation: 100.0\n2. Flexibility: 89.7\n3. Mentorship: 76.8\n"))
        .stdout(contains("Selected Age Range: 24 - 52"));
}

#[test]
fn narrows_by_ethnicity_and_gender() {
    TestEnv::new()
        .cmd()
        .args(["rank", "--ethnicity", "Black", "--gender", "Female"])
        .assert()
        .success()
        .stdout(contains("Top Three Attributes for Female aged 24-52 Black"))
        .stdout(contains("1. Flexibility: 100.0\n2. Mentorship: 88.9\n3. Compensation: 66.7\n"));
}

#[test]
fn rescales_within_the_selection() {
    let json = TestEnv::new().run_json(&["rank", "--gender", "Female"]);
    let attrs = &json["ranking"]["attributes"];
    assert_eq!(attrs[0]["name"], "Flexibility");
    assert_eq!(attrs[0]["score"], 100.0);
    assert_eq!(attrs[1]["name"], "Compensation");
    assert_eq!(json["ranking"]["matched_records"], 6);
}

#[test]
fn equal_scores_keep_column_order() {
    let json = TestEnv::new().run_json(&["rank", "--min-age", "40", "--max-age", "60"]);
    let names: Vec<&str> = json["ranking"]["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Compensation", "Flexibility", "Mentorship"]);
    assert_eq!(json["age_range"]["min"], 40);
}

#[test]
fn top_limits_and_clamps() {
    let one = TestEnv::new().run_json(&["rank", "--top", "1"]);
    assert_eq!(one["ranking"]["attributes"].as_array().unwrap().len(), 1);

    let many = TestEnv::new().run_json(&["rank", "--top", "10"]);
    assert_eq!(many["ranking"]["attributes"].as_array().unwrap().len(), 3);
}

#[test]
fn unknown_ethnicity_reports_no_data() {
    TestEnv::new()
        .cmd()
        .args(["rank", "--ethnicity", "Indigenous"])
        .assert()
        .code(2)
        .stderr(contains("No data for this selection"));
}

#[test]
fn empty_age_window_reports_no_data() {
    TestEnv::new()
        .cmd()
        .args(["rank", "--min-age", "0", "--max-age", "10"])
        .assert()
        .code(2)
        .stderr(contains("no records match"));
}

#[test]
fn non_positive_means_report_no_data() {
    TestEnv::with_csv("Ethnicity,Gender,Age,Pay,Flexibility\nX,M,30,0,-1\nX,F,40,0,-3\n")
        .cmd()
        .arg("rank")
        .assert()
        .code(2)
        .stderr(contains("maximum mean is 0"));
}

#[test]
fn inverted_age_range_is_an_error() {
    TestEnv::new()
        .cmd()
        .args(["rank", "--min-age", "50", "--max-age", "20"])
        .assert()
        .failure()
        .stderr(contains("invalid age range"));
}

#[test]
fn schema_lists_numeric_attributes_only() {
    TestEnv::new()
        .cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout("Compensation\nFlexibility\nMentorship\n");
}

#[test]
fn options_list_dropdown_values() {
    let json = TestEnv::new().run_json(&["options"]);
    assert_eq!(json["ethnicities"], serde_json::json!(["Asian", "Black", "Hispanic", "All"]));
    assert_eq!(json["genders"], serde_json::json!(["Female", "Male", "All"]));
    assert_eq!(json["age_bounds"], serde_json::json!({"min": 24, "max": 52}));
}

#[test]
fn custom_role_columns() {
    TestEnv::with_csv("Group,Sex,Years,Pay,Culture\nA,F,30,2,4\nB,M,44,6,3\n")
        .cmd()
        .args([
            "--ethnicity-column",
            "Group",
            "--gender-column",
            "Sex",
            "--age-column",
            "Years",
            "rank",
            "--ethnicity",
            "A",
        ])
        .assert()
        .success()
        .stdout(contains("1. Culture: 100.0\n2. Pay: 50.0\n"));
}

#[test]
fn table_without_attributes_fails_to_load() {
    TestEnv::with_csv("Ethnicity,Gender,Age,Notes\nX,M,30,hello\n")
        .cmd()
        .arg("schema")
        .assert()
        .failure()
        .stderr(contains("no numeric attribute columns"));
}
