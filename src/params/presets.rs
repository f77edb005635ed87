use crate::error::{EstimatorError, Result};
use crate::params::LweParams;

/// Named parameter sets, usable from the CLI with `--preset`.
pub const PRESET_NAMES: &[&str] = &[
    "toy",
    "small",
    "medium",
    "large",
    "kyber-like-512",
    "kyber-like-768",
    "kyber-like-1024",
];

/// n=64, q=127, σ=3: breaks with BKZ-40.
pub fn toy() -> Result<LweParams> {
    LweParams::new(64, 127, 3.0)
}

/// n=128, q=1031, σ=5 (~22 bits core-SVP).
pub fn small() -> Result<LweParams> {
    LweParams::new(128, 1031, 5.0)
}

/// n=256, q=7681, σ=8 (~73 bits core-SVP).
pub fn medium() -> Result<LweParams> {
    LweParams::new(256, 7681, 8.0)
}

/// n=512, q=12289, σ=10 (~156 bits core-SVP).
pub fn large() -> Result<LweParams> {
    LweParams::new(512, 12289, 10.0)
}

/// Plain-LWE analogue of Kyber's modulus and dimension with σ=1.
/// Module structure is ignored.
pub fn kyber_like(n: usize) -> Result<LweParams> {
    LweParams::new(n, 3329, 1.0)
}

/// Look up a preset by name.
pub fn by_name(name: &str) -> Result<LweParams> {
    match name {
        "toy" => toy(),
        "small" => small(),
        "medium" => medium(),
        "large" => large(),
        "kyber-like-512" => kyber_like(512),
        "kyber-like-768" => kyber_like(768),
        "kyber-like-1024" => kyber_like(1024),
        other => Err(EstimatorError::InvalidParam(
            format!("unknown preset '{other}', expected one of: {}", PRESET_NAMES.join(", "))
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_resolve() {
        for name in PRESET_NAMES {
            assert!(by_name(name).is_ok(), "preset {name}");
        }
        assert!(by_name("nope").is_err());
    }
}
