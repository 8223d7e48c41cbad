use crate::commands::base_commands::ReportFileFormat;
use crate::commands::report_format::format_savings_report;
use crate::services::histogram::write_histogram_png;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::simulation::{simulate, simulate_with_seed};
use crate::services::validation::validate;

pub fn simulate_command(input: &str, output: &str, format: ReportFileFormat, seed: Option<u64>) {
    let scenario = match load_scenario_from_yaml_file(input) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to load scenario: {e}");
            std::process::exit(1);
        }
    };

    let validation = validate(&scenario);
    if !validation.is_valid() {
        eprintln!("Scenario '{}' is not valid; fix before simulating:", scenario.name);
        for (field, message) in validation.errors() {
            eprintln!("  {field}: {message}");
        }
        std::process::exit(1);
    }

    let simulated = match seed {
        Some(seed) => simulate_with_seed(&scenario, seed),
        None => simulate(&scenario),
    };
    let result = match simulated {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to simulate scenario: {e}");
            std::process::exit(1);
        }
    };

    let serialized = match format {
        ReportFileFormat::Yaml => serde_yaml::to_string(&result.report)
            .map_err(|e| e.to_string()),
        ReportFileFormat::Json => serde_json::to_string_pretty(&result.report)
            .map_err(|e| e.to_string()),
    };
    let serialized = match serialized {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize simulation report: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(output, serialized) {
        eprintln!("Failed to write simulation report: {e}");
        std::process::exit(1);
    }

    let histogram_path = format!("{output}.png");
    if let Err(e) = write_histogram_png(&histogram_path, &result.savings) {
        eprintln!("Failed to write savings histogram: {e}");
        std::process::exit(1);
    }

    println!("{}", format_savings_report(&result.report));
    println!();
    println!("Simulation report written to {output}");
    println!("Savings histogram written to {histogram_path}");
}
