//! LWE estimator CLI
//!
//! # Usage
//! ```bash
//! lwe-estimate 256 7681 8.0
//! lwe-estimate 1024 2**32 3.2 --sieving --verbose
//! lwe-estimate --preset kyber-like-768 --json
//! ```

use std::process::ExitCode;

use clap::Parser;
use lwe_estimator::estimate::{estimate_with_config, SecurityEstimate};
use lwe_estimator::model::CostModel;
use lwe_estimator::params::presets;
use lwe_estimator::params::{LweParams, SearchConfigBuilder};
use tracing::error;

type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "lwe-estimate")]
#[command(about = "Primal-uSVP security estimate for plain LWE parameters")]
#[command(version)]
struct Cli {
    /// LWE dimension (accepts 2**k / 2^k)
    #[arg(required_unless_present = "preset", value_parser = parse_number)]
    n: Option<u64>,

    /// Modulus (accepts 2**k / 2^k)
    #[arg(required_unless_present = "preset", value_parser = parse_number)]
    q: Option<u64>,

    /// Error standard deviation
    #[arg(required_unless_present = "preset")]
    sigma: Option<f64>,

    /// Named parameter set instead of n, q, sigma
    #[arg(long, conflicts_with_all = ["n", "q", "sigma"])]
    preset: Option<String>,

    /// Use the sieving cost model (0.265·β) instead of core-SVP (0.292·β)
    #[arg(long)]
    sieving: bool,

    /// Show detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Print the estimate as JSON
    #[arg(long, conflicts_with = "verbose")]
    json: bool,

    /// Stop the sample sweep after this many consecutive worse candidates
    #[arg(long)]
    patience: Option<usize>,
}

/// Parse an integer, allowing `base**exp` and `base^exp`.
fn parse_number(s: &str) -> Result<u64, String> {
    for sep in ["**", "^"] {
        if let Some((base, exp)) = s.split_once(sep) {
            let base: u64 = base
                .trim()
                .parse()
                .map_err(|_| format!("invalid base in '{s}'"))?;
            let exp: u32 = exp
                .trim()
                .parse()
                .map_err(|_| format!("invalid exponent in '{s}'"))?;
            return base.checked_pow(exp).ok_or_else(|| format!("'{s}' overflows u64"));
        }
    }
    s.trim().parse().map_err(|_| format!("cannot parse '{s}'"))
}

fn resolve_params(cli: &Cli) -> AppResult<LweParams> {
    if let Some(name) = &cli.preset {
        return Ok(presets::by_name(name)?);
    }
    match (cli.n, cli.q, cli.sigma) {
        (Some(n), Some(q), Some(sigma)) => {
            let n = usize::try_from(n).map_err(|_| format!("n = {n} does not fit in usize"))?;
            Ok(LweParams::new(n, q, sigma)?)
        }
        _ => Err("expected 3 arguments: n, q, sigma".into()),
    }
}

fn print_verbose(r: &SecurityEstimate) {
    println!("Parameters:");
    println!("  n     = {}", r.n());
    println!("  q     = {} (≈2^{:.1})", r.q(), r.params().log2_q());
    println!("  σ     = {}", r.sigma());
    println!();
    println!("Attack: primal uSVP");
    println!("  β     = {}", r.beta());
    println!("  d     = {}", r.d());
    println!("  m     = {}", r.m());
    println!();
    if r.is_capped() {
        println!("Security: No lattice attack found");
    } else {
        println!("Security: {:.1} bits ({})", r.classical_bits(), r.cost_model().label());
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let params = resolve_params(cli)?;
    let mut builder = SearchConfigBuilder::new();
    if let Some(steps) = cli.patience {
        builder = builder.patience(steps);
    }
    let config = builder.build()?;

    let result = estimate_with_config(&params, CostModel::from_sieving(cli.sieving), &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if cli.verbose {
        print_verbose(&result);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
