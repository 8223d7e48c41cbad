use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::farm_type::FarmType;
use crate::domain::price_model::{DiscountPart, FullPricePart, MixtureParams, PriceModel};
use crate::domain::scenario::Scenario;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("scenario name must not be empty")]
    MissingName,
}

#[derive(Serialize, Deserialize)]
struct ScenarioRecord {
    #[serde(default)]
    id: Option<u32>,
    name: String,
    last_year_cost: f64,
    last_year_farms: u32,
    min_new_farms: u32,
    max_new_farms: u32,
    #[serde(default = "default_trials")]
    trials: usize,
    farm_types: Vec<FarmTypeRecord>,
    #[serde(default)]
    price_model: Option<PriceModelRecord>,
}

#[derive(Serialize, Deserialize)]
struct FarmTypeRecord {
    #[serde(default)]
    id: Option<u32>,
    name: String,
    share_percent: f64,
    min_discount: f64,
    max_discount: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum PriceModelRecord {
    Simple,
    Mixture {
        p_full_price: f64,
        #[serde(default)]
        full_price: Option<FullPriceRecord>,
        discount: DiscountRecord,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum FullPriceRecord {
    Fixed { multiplier: f64 },
    Normal { mean: f64, std: f64 },
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DiscountRecord {
    Uniform { min_multiplier: f64 },
    Beta { min_multiplier: f64, alpha: f64, beta: f64 },
}

fn default_trials() -> usize {
    10_000
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<Scenario, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<Scenario, ScenarioYamlError> {
    let record: ScenarioRecord = serde_yaml::from_str(input)?;
    if record.name.trim().is_empty() {
        return Err(ScenarioYamlError::MissingName);
    }

    let farm_types = record
        .farm_types
        .into_iter()
        .enumerate()
        .map(|(index, farm_type)| FarmType {
            // Ids are stable handles for edits; files may omit them, in
            // which case positions assign them.
            id: farm_type.id.unwrap_or(index as u32 + 1),
            name: farm_type.name,
            share_percent: farm_type.share_percent,
            min_discount: farm_type.min_discount,
            max_discount: farm_type.max_discount,
        })
        .collect();

    Ok(Scenario {
        id: record.id.unwrap_or(1),
        name: record.name,
        last_year_cost: record.last_year_cost,
        last_year_farms: record.last_year_farms,
        min_new_farms: record.min_new_farms,
        max_new_farms: record.max_new_farms,
        trials: record.trials,
        farm_types,
        price_model: price_model_from_record(record.price_model),
    })
}

pub fn serialize_scenario_to_yaml<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
) -> io::Result<()> {
    let record = ScenarioRecord {
        id: Some(scenario.id),
        name: scenario.name.clone(),
        last_year_cost: scenario.last_year_cost,
        last_year_farms: scenario.last_year_farms,
        min_new_farms: scenario.min_new_farms,
        max_new_farms: scenario.max_new_farms,
        trials: scenario.trials,
        farm_types: scenario
            .farm_types
            .iter()
            .map(|farm_type| FarmTypeRecord {
                id: Some(farm_type.id),
                name: farm_type.name.clone(),
                share_percent: farm_type.share_percent,
                min_discount: farm_type.min_discount,
                max_discount: farm_type.max_discount,
            })
            .collect(),
        price_model: Some(price_model_to_record(&scenario.price_model)),
    };

    let yaml = serde_yaml::to_string(&record)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}

fn price_model_from_record(record: Option<PriceModelRecord>) -> PriceModel {
    match record {
        None | Some(PriceModelRecord::Simple) => PriceModel::Simple,
        Some(PriceModelRecord::Mixture { p_full_price, full_price, discount }) => {
            PriceModel::Mixture(MixtureParams {
                p_full_price,
                full_price: match full_price {
                    None => FullPricePart::default(),
                    Some(FullPriceRecord::Fixed { multiplier }) => {
                        FullPricePart::Fixed { multiplier }
                    }
                    Some(FullPriceRecord::Normal { mean, std }) => {
                        FullPricePart::Normal { mean, std }
                    }
                },
                discount: match discount {
                    DiscountRecord::Uniform { min_multiplier } => {
                        DiscountPart::Uniform { min_multiplier }
                    }
                    DiscountRecord::Beta { min_multiplier, alpha, beta } => {
                        DiscountPart::Beta { min_multiplier, alpha, beta }
                    }
                },
            })
        }
    }
}

fn price_model_to_record(model: &PriceModel) -> PriceModelRecord {
    match model {
        PriceModel::Simple => PriceModelRecord::Simple,
        PriceModel::Mixture(params) => PriceModelRecord::Mixture {
            p_full_price: params.p_full_price,
            full_price: Some(match params.full_price {
                FullPricePart::Fixed { multiplier } => FullPriceRecord::Fixed { multiplier },
                FullPricePart::Normal { mean, std } => FullPriceRecord::Normal { mean, std },
            }),
            discount: match params.discount {
                DiscountPart::Uniform { min_multiplier } => {
                    DiscountRecord::Uniform { min_multiplier }
                }
                DiscountPart::Beta { min_multiplier, alpha, beta } => {
                    DiscountRecord::Beta { min_multiplier, alpha, beta }
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_applies_defaults() {
        let yaml = "name: Orchard run
last_year_cost: 500000
last_year_farms: 20
min_new_farms: 15
max_new_farms: 25
farm_types:
  - name: Smallholder
    share_percent: 100
    min_discount: 5
    max_discount: 15
";

        let scenario = deserialize_scenario_from_yaml_str(yaml).unwrap();
        assert_eq!(scenario.id, 1);
        assert_eq!(scenario.trials, 10_000);
        assert_eq!(scenario.farm_types[0].id, 1);
        assert_eq!(scenario.price_model, PriceModel::Simple);
    }

    #[test]
    fn mixture_model_parses_tagged_components() {
        let yaml = "name: Mixture run
last_year_cost: 500000
last_year_farms: 20
min_new_farms: 15
max_new_farms: 25
trials: 2000
farm_types:
  - name: Smallholder
    share_percent: 100
    min_discount: 5
    max_discount: 15
price_model:
  mode: mixture
  p_full_price: 0.3
  discount:
    type: beta
    min_multiplier: 0.75
    alpha: 2
    beta: 5
";

        let scenario = deserialize_scenario_from_yaml_str(yaml).unwrap();
        let PriceModel::Mixture(params) = scenario.price_model else {
            panic!("expected mixture model");
        };
        assert_eq!(params.p_full_price, 0.3);
        // Omitted full-price component defaults to the fixed 1.0 multiplier.
        assert_eq!(params.full_price, FullPricePart::Fixed { multiplier: 1.0 });
        assert_eq!(
            params.discount,
            DiscountPart::Beta { min_multiplier: 0.75, alpha: 2.0, beta: 5.0 }
        );
        assert_eq!(scenario.trials, 2000);
    }

    #[test]
    fn rejects_empty_scenario_name() {
        let yaml = "name: \"  \"
last_year_cost: 500000
last_year_farms: 20
min_new_farms: 15
max_new_farms: 25
farm_types: []
";

        let error = deserialize_scenario_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(error, ScenarioYamlError::MissingName));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let error = deserialize_scenario_from_yaml_str("name: [unclosed").unwrap_err();
        assert!(matches!(error, ScenarioYamlError::Parse(_)));
    }

    #[test]
    fn serialized_default_scenario_roundtrips() {
        let scenario = Scenario::with_defaults();
        let mut buffer = Vec::new();
        serialize_scenario_to_yaml(&mut buffer, &scenario).unwrap();

        let yaml = String::from_utf8(buffer).unwrap();
        assert!(yaml.contains("name: New scenario"));
        assert!(yaml.contains("mode: simple"));

        let parsed = deserialize_scenario_from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, scenario);
    }
}
