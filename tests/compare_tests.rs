use assert_fs::prelude::*;
use predicates::prelude::*;

fn scenario_yaml(name: &str, min_discount: u32, max_discount: u32) -> String {
    format!(
        "name: {name}
last_year_cost: 1000000
last_year_farms: 30
min_new_farms: 25
max_new_farms: 35
trials: 500
farm_types:
  - name: Only
    share_percent: 100
    min_discount: {min_discount}
    max_discount: {max_discount}
"
    )
}

#[test]
fn compare_prints_one_row_per_scenario() {
    let cautious = assert_fs::NamedTempFile::new("cautious.yaml").unwrap();
    cautious.write_str(&scenario_yaml("Cautious", 2, 8)).unwrap();
    let aggressive = assert_fs::NamedTempFile::new("aggressive.yaml").unwrap();
    aggressive.write_str(&scenario_yaml("Aggressive", 15, 30)).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("orchard");
    cmd.args([
        "compare",
        "-i",
        cautious.path().to_str().unwrap(),
        "-i",
        aggressive.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scenario Comparison"))
        .stdout(predicate::str::contains(
            "Scenario | Median | P10 | P90 | P(savings > 0)",
        ))
        .stdout(predicate::str::contains("Cautious | "))
        .stdout(predicate::str::contains("Aggressive | "));
}

#[test]
fn compare_fails_when_any_scenario_is_invalid() {
    let good = assert_fs::NamedTempFile::new("good.yaml").unwrap();
    good.write_str(&scenario_yaml("Good", 5, 10)).unwrap();
    let bad = assert_fs::NamedTempFile::new("bad.yaml").unwrap();
    bad.write_str(&scenario_yaml("Bad", 20, 10)).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("orchard");
    cmd.args([
        "compare",
        "-i",
        good.path().to_str().unwrap(),
        "-i",
        bad.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("discount_range"));
}
