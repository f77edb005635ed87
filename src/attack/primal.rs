//! Primal unique-SVP attack.
//!
//! Given m LWE samples (A, b = A·s + e mod q), the embedding lattice of
//! dimension d = m + n contains the short vector (e, s). BKZ-β recovers it once
//! the expected norm σ·√d of that vector falls below the GSA prediction for the
//! projected sublattice, which for fixed d bounds the admissible root-Hermite
//! factor from above:
//!
//!   ln δ ≤ (ln σ + ½·ln d − (m/d)·ln q) / d
//!
//! The optimizer sweeps m (outer loop) and, for each m, bisects the smallest β
//! meeting that bound (inner loop). Cost is monotone in β, so the minimal-cost
//! configuration is the minimal-β one.

use std::time::Instant;

use tracing::{debug, trace};

use crate::error::{EstimatorError, Result};
use crate::model::gsa::beta_from_delta;
use crate::params::{LweParams, SearchConfig};

/// Winning configuration of the primal-uSVP search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimalSolution {
    /// BKZ blocksize.
    pub beta: usize,
    /// Number of LWE samples used.
    pub m: usize,
    /// Embedding lattice dimension, m + n.
    pub d: usize,
    /// Number of sweep candidates evaluated.
    pub evaluated: usize,
}

impl PrimalSolution {
    pub fn is_capped(&self, config: &SearchConfig) -> bool {
        self.beta >= config.beta_max()
    }
}

/// Largest ln δ for which BKZ still recovers the embedded error with m samples.
/// Returns `None` when no reduction quality is sufficient.
#[inline]
pub fn max_log_delta(m: usize, n: usize, log_q: f64, log_sigma: f64) -> Option<f64> {
    let d = m.saturating_add(n) as f64;
    let log_delta = (log_sigma + 0.5 * d.ln() - (m as f64 / d) * log_q) / d;
    (log_delta > 0.0).then_some(log_delta)
}

/// Find the minimal-blocksize primal-uSVP configuration for `params`.
///
/// Fails when `n` leaves no lattice dimension under `config.d_max()` or when
/// the deadline passes mid-sweep. When no candidate is feasible the result is
/// capped at `config.beta_max()`.
pub fn primal_usvp(params: &LweParams, config: &SearchConfig) -> Result<PrimalSolution> {
    let n = params.n();
    config.check_dimension(n)?;

    let log_q = (params.q() as f64).ln();
    let log_sigma = params.sigma().ln();
    let samples = config.sample_range(n);

    debug!(
        n,
        q = params.q(),
        sigma = params.sigma(),
        m_start = samples.start,
        m_end = samples.end,
        "primal uSVP sweep"
    );

    let mut best = PrimalSolution {
        beta: config.beta_max(),
        m: samples.start,
        d: n.saturating_mul(2).min(config.d_max()),
        evaluated: 0,
    };
    let mut evaluated = 0usize;
    let mut worse_streak = 0usize;

    for m in samples {
        if let Some(deadline) = config.deadline() {
            if Instant::now() >= deadline {
                debug!(evaluated, "primal uSVP sweep hit deadline");
                return Err(EstimatorError::DeadlineExceeded { evaluated });
            }
        }
        evaluated += 1;

        let Some(log_delta) = max_log_delta(m, n, log_q, log_sigma) else {
            continue;
        };
        let beta = beta_from_delta(log_delta.exp(), config.beta_floor(), config.beta_max());

        if beta < best.beta {
            trace!(m, d = m + n, beta, "improved");
            best.beta = beta;
            best.m = m;
            best.d = m + n;
            worse_streak = 0;
        } else if beta > best.beta {
            worse_streak += 1;
            if config.patience().is_some_and(|limit| worse_streak >= limit) {
                debug!(m, worse_streak, "primal uSVP sweep stopped early");
                break;
            }
        }
    }

    best.evaluated = evaluated;
    debug!(beta = best.beta, m = best.m, d = best.d, evaluated, "primal uSVP result");
    Ok(best)
}
