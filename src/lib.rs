//! # LWE Estimator: primal-uSVP security of plain LWE
//!
//! Estimates the bit security of LWE parameters (n, q, σ) against the primal
//! unique-SVP lattice attack.
//!
//! Core idea: embed m LWE samples into a lattice of dimension d = m + n whose
//! shortest vector carries the secret and error. Under the Geometric Series
//! Assumption, BKZ-β finds it once its root-Hermite factor δ₀(β) is small
//! enough. The smallest such β over all m is converted to bits with a
//! core-SVP (0.292·β) or sieving (0.265·β) cost model.
//!
//! ## Quick Start
//!
//! ```
//! use lwe_estimator::prelude::*;
//!
//! let r = estimate_lwe(256, 7681, 8.0, "primal_usvp", false).unwrap();
//! assert_eq!(r.beta(), 250);
//! println!("{r}"); // LWE(n=256, q≈2^13, σ=8): ~73 bits (primal_usvp, β=250)
//!
//! // Same blocksize, cheaper sieving cost model
//! let params = LweParams::new(256, 7681, 8.0).unwrap();
//! let s = estimate(&params, true).unwrap();
//! assert_eq!(s.beta(), r.beta());
//! assert!(s.classical_bits() < r.classical_bits());
//! ```

pub mod error;
pub mod model;
pub mod params;
pub mod attack;
pub mod estimate;
pub mod cache;

pub use estimate::{
    estimate, estimate_batch, estimate_lwe, estimate_with_config,
    get_beta, get_bkz_cost, get_delta, SecurityEstimate,
};

/// Convenient re-exports for common types and functions.
pub mod prelude {
    pub use crate::error::{EstimatorError, Result};
    pub use crate::params::{LweParams, LweParamsBuilder, SearchConfig, SearchConfigBuilder};
    pub use crate::model::CostModel;
    pub use crate::attack::Attack;
    pub use crate::cache::EstimateCache;
    pub use crate::estimate::{
        estimate, estimate_batch, estimate_lwe, estimate_with_config,
        get_beta, get_bkz_cost, get_delta, SecurityEstimate,
    };
}
