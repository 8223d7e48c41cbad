#[derive(Debug, Clone, PartialEq)]
pub struct FarmType {
    pub id: u32,
    pub name: String,
    /// Relative market-share weight among all types in a scenario.
    pub share_percent: f64,
    /// Percentage price reduction bounds, both in [0, 100].
    pub min_discount: f64,
    pub max_discount: f64,
}

impl FarmType {
    pub fn new(id: u32, name: &str, share_percent: f64, min_discount: f64, max_discount: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            share_percent,
            min_discount,
            max_discount,
        }
    }

    /// Price multiplier bounds implied by the discount range: a discount of
    /// d percent maps to a multiplier of `1 - d/100`, so the larger discount
    /// becomes the lower multiplier bound.
    pub fn multiplier_range(&self) -> (f64, f64) {
        (1.0 - self.max_discount / 100.0, 1.0 - self.min_discount / 100.0)
    }
}
