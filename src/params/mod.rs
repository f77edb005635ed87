pub mod presets;

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};
use crate::model::constants::{
    BETA_MAX, D_MAX, GSA_CALIBRATION_FLOOR, M_MAX_FACTOR, M_MIN_DIVISOR,
};

/// Parameters of a plain LWE instance.
///
/// Validated at construction; there is no way to obtain an `LweParams` with
/// `n = 0`, `q ≤ 2` or a non-positive `sigma`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLweParams")]
pub struct LweParams {
    n: usize,
    q: u64,
    sigma: f64,
}

#[derive(Deserialize)]
struct RawLweParams {
    n: usize,
    q: u64,
    sigma: f64,
}

impl TryFrom<RawLweParams> for LweParams {
    type Error = EstimatorError;

    fn try_from(raw: RawLweParams) -> Result<Self> {
        LweParams::new(raw.n, raw.q, raw.sigma)
    }
}

impl LweParams {
    /// Create LWE parameters.
    /// - `n`: secret dimension, at least 1
    /// - `q`: modulus, greater than 2
    /// - `sigma`: error standard deviation, positive and finite
    pub fn new(n: usize, q: u64, sigma: f64) -> Result<Self> {
        if n == 0 {
            return Err(EstimatorError::InvalidParam("n must be positive".into()));
        }
        if q <= 2 {
            return Err(EstimatorError::InvalidParam(format!("q must be > 2, got {q}")));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(EstimatorError::InvalidParam(
                format!("sigma must be positive and finite, got {sigma}")
            ));
        }
        Ok(Self { n, q, sigma })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// log2 of the modulus.
    pub fn log2_q(&self) -> f64 {
        (self.q as f64).log2()
    }
}

impl fmt::Debug for LweParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LweParams(n={}, q={}, sigma={})", self.n, self.q, self.sigma)
    }
}

impl fmt::Display for LweParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Builder for LweParams.
pub struct LweParamsBuilder {
    n: usize,
    q: u64,
    sigma: f64,
}

impl LweParamsBuilder {
    pub fn new() -> Self {
        Self {
            n: 256,
            q: 7681,
            sigma: 3.2,
        }
    }

    pub fn n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn q(mut self, q: u64) -> Self {
        self.q = q;
        self
    }

    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set sigma from a Gaussian width parameter s = σ·√(2π).
    pub fn gaussian_width(mut self, s: f64) -> Self {
        self.sigma = s / (2.0 * std::f64::consts::PI).sqrt();
        self
    }

    pub fn build(self) -> Result<LweParams> {
        LweParams::new(self.n, self.q, self.sigma)
    }
}

impl Default for LweParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds of the primal-uSVP search.
///
/// The defaults sweep `m` over `[n/2, 8n)` and search β in `[40, 10000]`,
/// never examining a lattice dimension above `D_MAX`. Build custom bounds
/// with [`SearchConfigBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    m_min_divisor: usize,
    m_max_factor: usize,
    beta_floor: usize,
    beta_max: usize,
    d_max: usize,
    patience: Option<usize>,
    deadline: Option<Instant>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            m_min_divisor: M_MIN_DIVISOR,
            m_max_factor: M_MAX_FACTOR,
            beta_floor: GSA_CALIBRATION_FLOOR,
            beta_max: BETA_MAX,
            d_max: D_MAX,
            patience: None,
            deadline: None,
        }
    }
}

impl SearchConfig {
    /// Smallest blocksize the inner bisection considers (besides BKZ-2).
    pub fn beta_floor(&self) -> usize {
        self.beta_floor
    }

    /// Blocksize cap; reaching it yields a capped estimate.
    pub fn beta_max(&self) -> usize {
        self.beta_max
    }

    /// Largest embedding dimension d = m + n examined.
    pub fn d_max(&self) -> usize {
        self.d_max
    }

    /// Stop after this many consecutive candidates worse than the best.
    pub fn patience(&self) -> Option<usize> {
        self.patience
    }

    /// Abort the sweep once this instant has passed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) fn without_deadline(mut self) -> Self {
        self.deadline = None;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.m_min_divisor == 0 {
            return Err(EstimatorError::InvalidParam("m_min_divisor must be >= 1".into()));
        }
        if self.m_max_factor == 0 {
            return Err(EstimatorError::InvalidParam("m_max_factor must be >= 1".into()));
        }
        if self.beta_floor < 2 {
            return Err(EstimatorError::InvalidParam("beta_floor must be >= 2".into()));
        }
        if self.beta_max <= self.beta_floor {
            return Err(EstimatorError::InvalidParam(format!(
                "beta_max = {} must exceed beta_floor = {}",
                self.beta_max, self.beta_floor
            )));
        }
        if self.d_max < 2 {
            return Err(EstimatorError::InvalidParam("d_max must be >= 2".into()));
        }
        Ok(())
    }

    /// Check that at least one sweep candidate for dimension `n` fits under
    /// `d_max`.
    pub fn check_dimension(&self, n: usize) -> Result<()> {
        let smallest_d = n.checked_add(self.sample_start(n));
        match smallest_d {
            Some(d) if d <= self.d_max => Ok(()),
            _ => Err(EstimatorError::InvalidParam(format!(
                "n = {n} leaves no lattice dimension within d_max = {}",
                self.d_max
            ))),
        }
    }

    fn sample_start(&self, n: usize) -> usize {
        (n / self.m_min_divisor).max(1)
    }

    /// Sample-count range `[start, end)` swept for dimension `n`, truncated so
    /// that `m + n ≤ d_max`.
    pub fn sample_range(&self, n: usize) -> std::ops::Range<usize> {
        let start = self.sample_start(n);
        let room = self.d_max.saturating_sub(n).saturating_add(1);
        let end = self.m_max_factor.saturating_mul(n).min(room);
        start..end
    }
}

/// Builder for SearchConfig.
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn m_min_divisor(mut self, divisor: usize) -> Self {
        self.config.m_min_divisor = divisor;
        self
    }

    pub fn m_max_factor(mut self, factor: usize) -> Self {
        self.config.m_max_factor = factor;
        self
    }

    pub fn beta_floor(mut self, beta: usize) -> Self {
        self.config.beta_floor = beta;
        self
    }

    pub fn beta_max(mut self, beta: usize) -> Self {
        self.config.beta_max = beta;
        self
    }

    pub fn d_max(mut self, d: usize) -> Self {
        self.config.d_max = d;
        self
    }

    pub fn patience(mut self, steps: usize) -> Self {
        self.config.patience = Some(steps);
        self
    }

    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.config.deadline = Some(deadline);
        self
    }

    /// Deadline relative to now.
    pub fn timeout(self, budget: Duration) -> Self {
        self.deadline(Instant::now() + budget)
    }

    pub fn build(self) -> Result<SearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
