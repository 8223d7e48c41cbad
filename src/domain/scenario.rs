use crate::domain::farm_type::FarmType;
use crate::domain::price_model::PriceModel;

pub const MAX_TRIALS: usize = 200_000;

/// One named simulation configuration: last year's purchasing baseline,
/// bounds on this year's farm count, and the price model for new farms.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: u32,
    pub name: String,
    pub last_year_cost: f64,
    pub last_year_farms: u32,
    pub min_new_farms: u32,
    pub max_new_farms: u32,
    pub trials: usize,
    pub farm_types: Vec<FarmType>,
    pub price_model: PriceModel,
}

impl Scenario {
    /// Starting configuration for a freshly created scenario.
    pub fn with_defaults() -> Self {
        Self {
            id: 1,
            name: "New scenario".to_string(),
            last_year_cost: 1_000_000.0,
            last_year_farms: 30,
            min_new_farms: 25,
            max_new_farms: 35,
            trials: 10_000,
            farm_types: vec![
                FarmType::new(1, "Smallholder", 50.0, 5.0, 15.0),
                FarmType::new(2, "Cooperative", 30.0, 10.0, 20.0),
                FarmType::new(3, "Industrial", 20.0, 15.0, 30.0),
            ],
            price_model: PriceModel::Simple,
        }
    }

    /// Average amount paid per farm last year.
    pub fn avg_price_last_year(&self) -> f64 {
        self.last_year_cost / self.last_year_farms as f64
    }
}
