//! Security estimation entry points and the estimate record.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::attack::{primal_usvp, Attack};
use crate::error::{EstimatorError, Result};
use crate::model::constants::{BETA_MAX, DELTA_BKZ2};
use crate::model::{beta_from_delta, bkz_cost, bkz_cost_capped, delta_0, CostModel};
use crate::params::{LweParams, SearchConfig};

/// Result of estimating one LWE instance.
///
/// `classical_bits` is +∞ when the search hit the blocksize cap, i.e. no
/// lattice attack was found within the search bounds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SecurityEstimate {
    #[serde(flatten)]
    params: LweParams,
    beta: usize,
    d: usize,
    m: usize,
    classical_bits: f64,
    attack: Attack,
    cost_model: CostModel,
    capped: bool,
}

impl SecurityEstimate {
    pub fn n(&self) -> usize {
        self.params.n()
    }

    pub fn q(&self) -> u64 {
        self.params.q()
    }

    pub fn sigma(&self) -> f64 {
        self.params.sigma()
    }

    /// BKZ blocksize of the winning attack configuration.
    pub fn beta(&self) -> usize {
        self.beta
    }

    /// Embedding lattice dimension.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Number of LWE samples used.
    pub fn m(&self) -> usize {
        self.m
    }

    /// log2 cost of the attack under [`SecurityEstimate::cost_model`].
    pub fn classical_bits(&self) -> f64 {
        self.classical_bits
    }

    pub fn attack(&self) -> Attack {
        self.attack
    }

    pub fn cost_model(&self) -> CostModel {
        self.cost_model
    }

    pub fn is_capped(&self) -> bool {
        self.capped
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }
}

impl fmt::Display for SecurityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        write!(f, "LWE(n={}, q≈2^{:.0}, σ={}): ", p.n(), p.log2_q(), p.sigma())?;
        if self.capped {
            write!(f, "No lattice attack found ({})", self.attack)
        } else {
            write!(f, "~{:.0} bits ({}, β={})", self.classical_bits, self.attack, self.beta)
        }
    }
}

/// Estimate plain LWE security against the named attack.
///
/// `attack` must be `"primal_usvp"`; `sieving` selects the 0.265·β cost model
/// instead of core-SVP 0.292·β.
///
/// ```
/// let r = lwe_estimator::estimate_lwe(256, 7681, 8.0, "primal_usvp", false).unwrap();
/// assert_eq!(r.beta(), 250);
/// ```
pub fn estimate_lwe(
    n: usize,
    q: u64,
    sigma: f64,
    attack: &str,
    sieving: bool,
) -> Result<SecurityEstimate> {
    let attack: Attack = attack.parse()?;
    let params = LweParams::new(n, q, sigma)?;
    match attack {
        Attack::PrimalUsvp => estimate(&params, sieving),
    }
}

/// Estimate security of pre-validated parameters with the default search bounds.
pub fn estimate(params: &LweParams, sieving: bool) -> Result<SecurityEstimate> {
    estimate_with_config(params, CostModel::from_sieving(sieving), &SearchConfig::default())
}

/// Estimate security with explicit cost model and search bounds.
pub fn estimate_with_config(
    params: &LweParams,
    cost_model: CostModel,
    config: &SearchConfig,
) -> Result<SecurityEstimate> {
    let _span = info_span!(
        "estimate",
        n = params.n(),
        q = params.q(),
        model = cost_model.label()
    )
    .entered();

    let solution = primal_usvp(params, config)?;
    let capped = solution.is_capped(config);
    let classical_bits = bkz_cost_capped(solution.beta, cost_model, config.beta_max());
    debug!(beta = solution.beta, classical_bits, capped, "estimate assembled");

    Ok(SecurityEstimate {
        params: *params,
        beta: solution.beta,
        d: solution.d,
        m: solution.m,
        classical_bits,
        attack: Attack::PrimalUsvp,
        cost_model,
        capped,
    })
}

/// Estimate many parameter sets in parallel. Output order matches input order.
pub fn estimate_batch(
    params: &[LweParams],
    cost_model: CostModel,
) -> Vec<Result<SecurityEstimate>> {
    let config = SearchConfig::default();
    params
        .par_iter()
        .map(|p| estimate_with_config(p, cost_model, &config))
        .collect()
}

/// Root-Hermite factor reached by BKZ-β.
pub fn get_delta(beta: usize) -> Result<f64> {
    if beta < 2 {
        return Err(EstimatorError::OutOfRange(format!(
            "blocksize must be >= 2, got {beta}"
        )));
    }
    Ok(delta_0(beta))
}

/// Smallest BKZ blocksize reaching root-Hermite factor `delta`.
///
/// Unlike the attack search, which folds small blocksizes onto the GSA
/// calibration floor, this searches all of `[2, BETA_MAX]`. Fails for δ outside
/// (1, 2) and for δ below what BKZ can reach under the blocksize cap.
pub fn get_beta(delta: f64) -> Result<usize> {
    if !delta.is_finite() || delta <= 1.0 || delta >= 2.0 {
        return Err(EstimatorError::OutOfRange(format!(
            "delta must lie in (1, 2), got {delta}"
        )));
    }
    if delta < delta_0(BETA_MAX) {
        return Err(EstimatorError::OutOfRange(format!(
            "delta {delta} unreachable below blocksize {BETA_MAX}"
        )));
    }
    if delta >= DELTA_BKZ2 {
        return Ok(2);
    }
    Ok(beta_from_delta(delta, 2, BETA_MAX))
}

/// BKZ-β cost in bits under core-SVP, or sieving when `sieving` is set.
pub fn get_bkz_cost(beta: usize, sieving: bool) -> f64 {
    bkz_cost(beta, CostModel::from_sieving(sieving))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SearchConfigBuilder;

    fn core(n: usize, q: u64, sigma: f64) -> SecurityEstimate {
        estimate_lwe(n, q, sigma, "primal_usvp", false).unwrap()
    }

    #[test]
    fn test_matches_reference() {
        let cases = [
            (256, 7681, 8.0, 73.0, 250),
            (512, 12289, 10.0, 156.0, 533),
            (64, 127, 3.0, 12.0, 40),
            (128, 1031, 5.0, 22.0, 75),
        ];
        for (n, q, sigma, bits, beta) in cases {
            let r = core(n, q, sigma);
            assert_eq!(r.beta(), beta, "beta mismatch for n={n}");
            assert!((r.classical_bits() - bits).abs() < 1.0, "bits mismatch for n={n}");
        }
    }

    #[test]
    fn test_attributes() {
        let r = core(256, 7681, 8.0);
        assert_eq!((r.n(), r.q(), r.sigma()), (256, 7681, 8.0));
        assert_eq!(r.d(), r.m() + 256);
        assert!(r.m() > 0);
        assert_eq!(r.attack().as_str(), "primal_usvp");
        assert_eq!(r.cost_model(), CostModel::CoreSvp);
        assert!(!r.is_capped());
        assert_eq!(*r.params(), LweParams::new(256, 7681, 8.0).unwrap());
    }

    #[test]
    fn test_sieving_same_beta_fewer_bits() {
        let core_svp = core(256, 7681, 8.0);
        let sieve = estimate_lwe(256, 7681, 8.0, "primal_usvp", true).unwrap();
        assert_eq!(core_svp.beta(), sieve.beta());
        assert!(sieve.classical_bits() < core_svp.classical_bits());
        assert_eq!(sieve.cost_model(), CostModel::Sieving);
    }

    #[test]
    fn test_params_path_identical() {
        let params = LweParams::new(256, 7681, 8.0).unwrap();
        for sieving in [false, true] {
            let a = estimate(&params, sieving).unwrap();
            let b = estimate_lwe(256, 7681, 8.0, "primal_usvp", sieving).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.classical_bits().to_bits(), b.classical_bits().to_bits());
        }
    }

    #[test]
    fn test_invalid_inputs() {
        for (n, q, sigma) in [(0, 100, 1.0), (100, 1, 1.0), (100, 100, -1.0)] {
            assert!(matches!(
                estimate_lwe(n, q, sigma, "primal_usvp", false),
                Err(EstimatorError::InvalidParam(_))
            ));
        }
    }

    #[test]
    fn test_unsupported_attack() {
        assert_eq!(
            estimate_lwe(256, 7681, 8.0, "dual", false),
            Err(EstimatorError::UnsupportedAttack("dual".into()))
        );
    }

    #[test]
    fn test_display() {
        let s = core(256, 7681, 8.0).to_string();
        assert!(s.contains("256"));
        assert!(s.contains("73"));
        assert!(s.contains("primal_usvp"));
        assert_eq!(s, "LWE(n=256, q≈2^13, σ=8): ~73 bits (primal_usvp, β=250)");
    }

    #[test]
    fn test_capped_estimate() {
        // Needs BKZ-250 with the default bounds.
        let params = LweParams::new(256, 7681, 8.0).unwrap();
        let config = SearchConfigBuilder::new().beta_max(200).build().unwrap();
        let r = estimate_with_config(&params, CostModel::CoreSvp, &config).unwrap();
        assert!(r.is_capped());
        assert_eq!(r.beta(), 200);
        assert!(r.classical_bits().is_infinite());
        assert!(r.to_string().contains("No lattice attack found"));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let params: Vec<LweParams> = [(64, 127, 3.0), (128, 1031, 5.0), (256, 7681, 8.0)]
            .iter()
            .map(|&(n, q, s)| LweParams::new(n, q, s).unwrap())
            .collect();
        let batch = estimate_batch(&params, CostModel::Sieving);
        assert_eq!(batch.len(), 3);
        for (p, r) in params.iter().zip(batch) {
            assert_eq!(r.unwrap(), estimate(p, true).unwrap());
        }
    }

    #[test]
    fn test_get_beta_inverts_below_calibration_floor() {
        for beta in [2, 3, 10, 20, 30, 38, 39, 40, 41, 45, 52, 53] {
            let delta = get_delta(beta).unwrap();
            assert_eq!(get_beta(delta).unwrap(), beta, "delta {delta}");
        }
        // The attack search still folds these onto the floor.
        let delta = get_delta(10).unwrap();
        assert_eq!(beta_from_delta(delta, 40, BETA_MAX), 40);
    }

    #[test]
    fn test_low_level_accessors() {
        assert!((get_delta(50).unwrap() - 1.011).abs() < 0.002);
        assert!(matches!(get_delta(1), Err(EstimatorError::OutOfRange(_))));

        for beta in [100, 200, 300, 400] {
            let recovered = get_beta(get_delta(beta).unwrap()).unwrap();
            assert!(recovered.abs_diff(beta) <= 1);
        }
        assert_eq!(get_beta(1.5).unwrap(), 2);
        for bad in [1.0, 0.9, 2.0, 3.0, f64::NAN, 1.0001] {
            assert!(matches!(get_beta(bad), Err(EstimatorError::OutOfRange(_))), "delta {bad}");
        }

        assert!((get_bkz_cost(100, false) - 29.2).abs() < 0.1);
        assert!((get_bkz_cost(100, true) - 26.5).abs() < 0.1);
    }
}
