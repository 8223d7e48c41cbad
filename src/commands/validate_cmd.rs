use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::validation::validate;

pub fn validate_command(input: &str) {
    let scenario = match load_scenario_from_yaml_file(input) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to load scenario: {e}");
            std::process::exit(1);
        }
    };

    let report = validate(&scenario);
    if report.is_valid() {
        println!("Scenario '{}' is valid", scenario.name);
    } else {
        eprintln!(
            "Scenario '{}' has {} validation error(s):",
            scenario.name,
            report.errors().len()
        );
        for (field, message) in report.errors() {
            eprintln!("  {field}: {message}");
        }
        std::process::exit(1);
    }
}
