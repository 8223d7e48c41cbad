pub mod base_commands;
pub mod compare_cmd;
pub mod report_format;
pub mod simulate_cmd;
pub mod validate_cmd;
