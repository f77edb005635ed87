//! Numeric constants of the attack and cost models.
//!
//! Every number the estimator depends on lives here, so that swapping in a new
//! cost model or recalibrating the GSA is a data change.

/// Core-SVP exponent for classical BKZ: one SVP-β call costs 2^(0.292·β).
pub const CORE_SVP_EXPONENT: f64 = 0.292;

/// Sieving-only exponent: 2^(0.265·β).
pub const SIEVING_EXPONENT: f64 = 0.265;

/// Root-Hermite factor of BKZ-2 (LLL-like reduction).
pub const DELTA_BKZ2: f64 = 1.0219;

/// Root-Hermite factor of BKZ-50, anchor of the small-blocksize interpolation.
pub const DELTA_BKZ50: f64 = 1.0126;

/// Smallest blocksize the attack search bisects from. Below it δ is linearly
/// interpolated between BKZ-2 and BKZ-50.
pub const GSA_CALIBRATION_FLOOR: usize = 40;

/// First blocksize where the closed form is strictly decreasing and below its
/// value at the calibration floor. Between the two, δ is bridged linearly.
pub const GSA_ASYMPTOTIC_FROM: usize = 53;

/// Blocksize cap. Reaching it means no lattice attack was found.
pub const BETA_MAX: usize = 10_000;

/// Lower end of the sample sweep is `max(n / M_MIN_DIVISOR, 1)`.
pub const M_MIN_DIVISOR: usize = 2;

/// Upper end (exclusive) of the sample sweep is `M_MAX_FACTOR · n`.
pub const M_MAX_FACTOR: usize = 8;

/// Largest embedding dimension d = m + n the sweep ever examines.
pub const D_MAX: usize = 1 << 17;
