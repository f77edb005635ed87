pub mod constants;
pub mod cost;
pub mod gsa;

pub use cost::{bkz_cost, bkz_cost_capped, CostModel};
pub use gsa::{beta_from_delta, delta_0};
