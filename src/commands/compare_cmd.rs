use crate::commands::report_format::format_comparison_table;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::simulation::{simulate, simulate_with_seed};
use crate::services::simulation_types::SavingsReport;
use crate::services::validation::validate;

pub fn compare_command(inputs: &[String], seed: Option<u64>) {
    let mut reports: Vec<SavingsReport> = Vec::with_capacity(inputs.len());

    for input in inputs {
        let scenario = match load_scenario_from_yaml_file(input) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario {input}: {e}");
                std::process::exit(1);
            }
        };

        let validation = validate(&scenario);
        if !validation.is_valid() {
            eprintln!("Scenario '{}' ({input}) is not valid:", scenario.name);
            for (field, message) in validation.errors() {
                eprintln!("  {field}: {message}");
            }
            std::process::exit(1);
        }

        let simulated = match seed {
            Some(seed) => simulate_with_seed(&scenario, seed),
            None => simulate(&scenario),
        };
        match simulated {
            Ok(result) => reports.push(result.report),
            Err(e) => {
                eprintln!("Failed to simulate scenario '{}': {e}", scenario.name);
                std::process::exit(1);
            }
        }
    }

    println!("{}", format_comparison_table(&reports));
}
