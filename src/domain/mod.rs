pub mod farm_type;
pub mod price_model;
pub mod scenario;
