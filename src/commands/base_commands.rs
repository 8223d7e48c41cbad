use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a scenario template with default values
    Init {
        /// Output scenario YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Check a scenario file and report every invalid field
    Validate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
    },
    /// Run the Monte Carlo savings simulation for a scenario
    Simulate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output report file
        #[arg(short, long)]
        output: String,
        /// Report file format
        #[arg(short, long, value_enum, default_value_t = ReportFileFormat::Yaml)]
        format: ReportFileFormat,
        /// Random seed; omit it to keep repeated runs reproducible
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Simulate several scenario files and compare their savings
    Compare {
        /// Scenario YAML files
        #[arg(short, long, required = true, num_args = 1..)]
        inputs: Vec<String>,
        /// Random seed applied to every scenario
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ReportFileFormat {
    Yaml,
    Json,
}
