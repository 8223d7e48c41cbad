mod commands;
mod domain;
mod services;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::compare_cmd::compare_command;
use crate::commands::simulate_cmd::simulate_command;
use crate::commands::validate_cmd::validate_command;
use crate::domain::scenario::Scenario;
use crate::services::scenario_yaml::serialize_scenario_to_yaml;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        Commands::Init { output } => {
            let scenario = Scenario::with_defaults();
            let mut buffer = Vec::new();
            if let Err(e) = serialize_scenario_to_yaml(&mut buffer, &scenario) {
                eprintln!("Failed to serialize scenario template: {e}");
                std::process::exit(1);
            }
            if let Err(e) = std::fs::write(&output, buffer) {
                eprintln!("Failed to write scenario template: {e}");
                std::process::exit(1);
            }
            println!("Scenario template written to {output}");
        }
        Commands::Validate { input } => validate_command(&input),
        Commands::Simulate { input, output, format, seed } => {
            simulate_command(&input, &output, format, seed);
        }
        Commands::Compare { inputs, seed } => compare_command(&inputs, seed),
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            generate(shell, &mut cmd, "orchard", &mut std::io::stdout());
        }
    }
}
