use rand::Rng;
use rand_distr::{Beta, Distribution, Normal};
use thiserror::Error;

use crate::domain::price_model::{DiscountPart, FullPricePart, PriceModel};
use crate::domain::scenario::Scenario;
use crate::services::rng;

/// Configuration failures while building distributions. These are distinct
/// from user-input validation errors: a validated scenario never produces
/// them, so the run fails loudly instead of falling back.
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("invalid beta shape parameters: alpha={alpha}, beta={beta}")]
    BetaShape { alpha: f64, beta: f64 },
    #[error("invalid normal parameters: mean={mean}, std={std}")]
    NormalParams { mean: f64, std: f64 },
}

/// Per-farm price-multiplier source, built once per run so the trial loop
/// draws without allocating. Exactly one of the two schemes is active for a
/// scenario; mixture mode never touches farm-type assignment.
#[derive(Debug, Clone)]
pub enum MultiplierSampler {
    Simple {
        weights: Vec<f64>,
        ranges: Vec<(f64, f64)>,
    },
    Mixture {
        p_full_price: f64,
        full_price: FullPriceSampler,
        discount: DiscountSampler,
    },
}

#[derive(Debug, Clone)]
pub enum FullPriceSampler {
    Fixed(f64),
    /// Draws clipped to [0, 2] to forbid negative or implausible prices.
    Normal(Normal<f64>),
}

#[derive(Debug, Clone)]
pub enum DiscountSampler {
    Uniform {
        min_multiplier: f64,
    },
    /// Beta sample rescaled linearly onto `[min_multiplier, 1.0)`.
    Beta {
        distribution: Beta<f64>,
        min_multiplier: f64,
    },
}

impl MultiplierSampler {
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SamplerError> {
        match &scenario.price_model {
            PriceModel::Simple => Ok(MultiplierSampler::Simple {
                weights: scenario.farm_types.iter().map(|t| t.share_percent).collect(),
                ranges: scenario.farm_types.iter().map(|t| t.multiplier_range()).collect(),
            }),
            PriceModel::Mixture(params) => {
                let full_price = match params.full_price {
                    FullPricePart::Fixed { multiplier } => FullPriceSampler::Fixed(multiplier),
                    FullPricePart::Normal { mean, std } => {
                        let normal = Normal::new(mean, std)
                            .map_err(|_| SamplerError::NormalParams { mean, std })?;
                        FullPriceSampler::Normal(normal)
                    }
                };
                let discount = match params.discount {
                    DiscountPart::Uniform { min_multiplier } => {
                        DiscountSampler::Uniform { min_multiplier }
                    }
                    DiscountPart::Beta { min_multiplier, alpha, beta } => {
                        let distribution = Beta::new(alpha, beta)
                            .map_err(|_| SamplerError::BetaShape { alpha, beta })?;
                        DiscountSampler::Beta { distribution, min_multiplier }
                    }
                };
                Ok(MultiplierSampler::Mixture {
                    p_full_price: params.p_full_price,
                    full_price,
                    discount,
                })
            }
        }
    }

    /// Draws one price multiplier from the shared generator state.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            MultiplierSampler::Simple { weights, ranges } => {
                let index = rng::categorical(rng, weights);
                let (low, high) = ranges[index];
                rng::uniform_real(rng, low, high)
            }
            MultiplierSampler::Mixture { p_full_price, full_price, discount } => {
                if rng.gen_bool(*p_full_price) {
                    full_price.draw(rng)
                } else {
                    discount.draw(rng)
                }
            }
        }
    }
}

impl FullPriceSampler {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            FullPriceSampler::Fixed(multiplier) => *multiplier,
            FullPriceSampler::Normal(normal) => normal.sample(rng).clamp(0.0, 2.0),
        }
    }
}

impl DiscountSampler {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            DiscountSampler::Uniform { min_multiplier } => {
                rng::uniform_real(rng, *min_multiplier, 1.0)
            }
            DiscountSampler::Beta { distribution, min_multiplier } => {
                let sample = distribution.sample(rng);
                min_multiplier + sample * (1.0 - min_multiplier)
            }
        }
    }
}
