pub mod primal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

pub use primal::{primal_usvp, PrimalSolution};

/// Attack family used to produce an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Attack {
    /// Primal attack: Kannan embedding solved as unique-SVP with BKZ.
    #[default]
    #[serde(rename = "primal_usvp")]
    PrimalUsvp,
}

impl Attack {
    pub fn as_str(self) -> &'static str {
        match self {
            Attack::PrimalUsvp => "primal_usvp",
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attack {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primal_usvp" => Ok(Attack::PrimalUsvp),
            other => Err(EstimatorError::UnsupportedAttack(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attack() {
        assert_eq!("primal_usvp".parse::<Attack>().unwrap(), Attack::PrimalUsvp);
        assert_eq!(Attack::PrimalUsvp.to_string(), "primal_usvp");
        for name in ["dual", "hybrid", "PRIMAL_USVP", ""] {
            assert_eq!(
                name.parse::<Attack>(),
                Err(EstimatorError::UnsupportedAttack(name.to_string()))
            );
        }
    }
}
