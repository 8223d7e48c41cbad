pub mod histogram;
pub mod mixture_sampler;
pub mod percentiles;
pub mod rng;
pub mod scenario_yaml;
pub mod simulation;
pub mod simulation_types;
pub mod statistics;
pub mod validation;
