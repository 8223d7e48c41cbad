/// Strategy for drawing a farm's price multiplier, selected once per
/// scenario. Simple mode draws a farm type from the market-share weights and
/// samples within that type's discount range; mixture mode ignores farm
/// types and draws from a two-component full-price/discount distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceModel {
    Simple,
    Mixture(MixtureParams),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixtureParams {
    /// Probability that a farm lands in the full-price component.
    pub p_full_price: f64,
    pub full_price: FullPricePart,
    pub discount: DiscountPart,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FullPricePart {
    Fixed { multiplier: f64 },
    /// Draws are clipped to [0, 2] to forbid negative or implausible prices.
    Normal { mean: f64, std: f64 },
}

impl Default for FullPricePart {
    fn default() -> Self {
        FullPricePart::Fixed { multiplier: 1.0 }
    }
}

/// Discount component over `[min_multiplier, 1.0)`. The Beta variant
/// rescales a Beta(alpha, beta) sample linearly onto that interval.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountPart {
    Uniform { min_multiplier: f64 },
    Beta { min_multiplier: f64, alpha: f64, beta: f64 },
}

impl DiscountPart {
    pub fn min_multiplier(&self) -> f64 {
        match self {
            DiscountPart::Uniform { min_multiplier } => *min_multiplier,
            DiscountPart::Beta { min_multiplier, .. } => *min_multiplier,
        }
    }
}
