use std::collections::BTreeMap;

use crate::domain::price_model::{DiscountPart, FullPricePart, MixtureParams, PriceModel};
use crate::domain::scenario::{MAX_TRIALS, Scenario};

/// Field-keyed validation errors. Every applicable check is reported; a
/// failing scenario must not be simulated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }
}

/// Checks all scenario fields independently and reports every violation.
pub fn validate(scenario: &Scenario) -> ValidationReport {
    let mut report = ValidationReport::default();

    if scenario.last_year_cost <= 0.0 {
        report.add("last_year_cost", "last year's cost must be greater than zero");
    }
    if scenario.last_year_farms == 0 {
        report.add("last_year_farms", "last year's farm count must be greater than zero");
    }
    if scenario.min_new_farms == 0 {
        report.add("min_new_farms", "minimum farm count must be greater than zero");
    }
    if scenario.max_new_farms == 0 {
        report.add("max_new_farms", "maximum farm count must be greater than zero");
    }
    if scenario.min_new_farms > scenario.max_new_farms {
        report.add(
            "min_new_farms",
            "minimum farm count must not exceed maximum farm count",
        );
    }
    if scenario.trials == 0 || scenario.trials > MAX_TRIALS {
        report.add(
            "trials",
            format!("trials must be between 1 and {MAX_TRIALS}"),
        );
    }

    validate_farm_types(scenario, &mut report);
    if let PriceModel::Mixture(params) = &scenario.price_model {
        validate_mixture(params, &mut report);
    }

    report
}

fn validate_farm_types(scenario: &Scenario, report: &mut ValidationReport) {
    if scenario.farm_types.is_empty() {
        report.add("farm_types", "at least one farm type is required");
        return;
    }

    let share_sum: f64 = scenario.farm_types.iter().map(|t| t.share_percent).sum();
    if (share_sum - 100.0).abs() > 0.5 {
        report.add(
            "farm_types",
            format!("farm type shares must sum to 100%, currently {share_sum:.1}%"),
        );
    }

    for (index, farm_type) in scenario.farm_types.iter().enumerate() {
        if !(0.0..=100.0).contains(&farm_type.share_percent) {
            report.add(
                format!("farm_types[{index}].share_percent"),
                "share must be between 0 and 100",
            );
        }
        if !(0.0..=100.0).contains(&farm_type.min_discount) {
            report.add(
                format!("farm_types[{index}].min_discount"),
                "min discount must be between 0 and 100",
            );
        }
        if !(0.0..=100.0).contains(&farm_type.max_discount) {
            report.add(
                format!("farm_types[{index}].max_discount"),
                "max discount must be between 0 and 100",
            );
        }
        if farm_type.min_discount > farm_type.max_discount {
            report.add(
                format!("farm_types[{index}].discount_range"),
                "min discount must not exceed max discount",
            );
        }
    }
}

fn validate_mixture(params: &MixtureParams, report: &mut ValidationReport) {
    if !(0.0..=1.0).contains(&params.p_full_price) {
        report.add(
            "price_model.p_full_price",
            "full-price probability must be between 0 and 1",
        );
    }

    let min_multiplier = params.discount.min_multiplier();
    if min_multiplier >= 1.0 {
        report.add(
            "price_model.min_multiplier",
            "minimum discount multiplier must be less than 1.0",
        );
    } else if min_multiplier <= 0.0 {
        report.add(
            "price_model.min_multiplier",
            "minimum discount multiplier must be greater than 0",
        );
    }

    if let DiscountPart::Beta { alpha, beta, .. } = params.discount {
        if alpha <= 0.0 {
            report.add("price_model.alpha", "alpha must be greater than 0");
        }
        if beta <= 0.0 {
            report.add("price_model.beta", "beta must be greater than 0");
        }
    }

    if let FullPricePart::Normal { std, .. } = params.full_price {
        if std < 0.0 {
            report.add(
                "price_model.full_price_std",
                "full-price standard deviation must not be negative",
            );
        }
    }
}
