use rand::Rng;
use thiserror::Error;

use crate::domain::scenario::Scenario;
use crate::services::mixture_sampler::{MultiplierSampler, SamplerError};
use crate::services::rng::{self, DEFAULT_SEED};
use crate::services::simulation_types::{SavingsReport, SimulationResult};
use crate::services::statistics;
use crate::services::validation::validate;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("scenario failed validation: {0}")]
    InvalidScenario(String),
    #[error("sampler configuration error: {0}")]
    Sampler(#[from] SamplerError),
}

/// Runs the scenario with the fixed default seed, so unchanged inputs
/// reproduce the same result across runs.
pub fn simulate(scenario: &Scenario) -> Result<SimulationResult, SimulationError> {
    simulate_with_seed(scenario, DEFAULT_SEED)
}

pub fn simulate_with_seed(
    scenario: &Scenario,
    seed: u64,
) -> Result<SimulationResult, SimulationError> {
    let mut generator = rng::seeded(seed);
    let mut result = run_simulation_with_rng(scenario, &mut generator)?;
    result.report.seed = seed;
    Ok(result)
}

/// Trial loop against a caller-supplied generator. Refuses scenarios that
/// fail validation instead of producing garbage; a run either returns a
/// complete result or no result at all.
pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    scenario: &Scenario,
    generator: &mut R,
) -> Result<SimulationResult, SimulationError> {
    let report = validate(scenario);
    if !report.is_valid() {
        let summary = report
            .errors()
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SimulationError::InvalidScenario(summary));
    }

    let sampler = MultiplierSampler::from_scenario(scenario)?;
    let avg_price_last_year = scenario.avg_price_last_year();
    let last_year_farms = scenario.last_year_farms as f64;

    let mut savings = Vec::with_capacity(scenario.trials);
    for _ in 0..scenario.trials {
        let n_farms = rng::uniform_int(generator, scenario.min_new_farms, scenario.max_new_farms);

        let mut this_year_partial = 0.0;
        for _ in 0..n_farms {
            this_year_partial += sampler.draw(generator) * avg_price_last_year;
        }

        // Each trial samples a different farm count, so the partial cost is
        // rescaled to last year's fleet size before comparing total spend.
        let this_year_scaled = this_year_partial * (last_year_farms / n_farms as f64);
        savings.push(scenario.last_year_cost - this_year_scaled);
    }

    let stats = statistics::summarize(&savings);
    let histogram = statistics::histogram(&savings);

    Ok(SimulationResult {
        report: SavingsReport {
            scenario: scenario.name.clone(),
            seed: DEFAULT_SEED,
            trials: scenario.trials,
            stats,
            histogram,
        },
        savings,
    })
}
