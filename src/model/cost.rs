use serde::{Deserialize, Serialize};

use crate::model::constants::{BETA_MAX, CORE_SVP_EXPONENT, SIEVING_EXPONENT};

/// Cost regime used to turn a BKZ blocksize into bits of work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// Classical core-SVP, 2^(0.292·β).
    #[default]
    CoreSvp,
    /// Sieving only, 2^(0.265·β).
    Sieving,
}

impl CostModel {
    pub fn from_sieving(sieving: bool) -> Self {
        if sieving {
            CostModel::Sieving
        } else {
            CostModel::CoreSvp
        }
    }

    /// Exponent c in the 2^(c·β) cost of one SVP-β call.
    pub fn exponent(self) -> f64 {
        match self {
            CostModel::CoreSvp => CORE_SVP_EXPONENT,
            CostModel::Sieving => SIEVING_EXPONENT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CostModel::CoreSvp => "core-svp",
            CostModel::Sieving => "sieving",
        }
    }
}

/// BKZ-β cost in log2.
///
/// Blocksizes below 2 cost nothing; the blocksize cap costs +∞.
#[inline]
pub fn bkz_cost(beta: usize, model: CostModel) -> f64 {
    bkz_cost_capped(beta, model, BETA_MAX)
}

/// Like [`bkz_cost`], with an explicit blocksize cap.
#[inline]
pub fn bkz_cost_capped(beta: usize, model: CostModel, beta_max: usize) -> f64 {
    if beta < 2 {
        return 0.0;
    }
    if beta >= beta_max {
        return f64::INFINITY;
    }
    model.exponent() * beta as f64
}
