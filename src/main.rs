use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use harmonic_series::{
    direct_harmonic, EstimatorConfig, HarmonicEstimate, HarmonicEstimator, DIRECT_CUTOFF, TERMS,
};
use tracing_subscriber::EnvFilter;

/// Largest n `--verify` will brute-force.
const VERIFY_LIMIT: u64 = 10_000_000_000;

#[derive(Parser, Debug)]
#[command(name = "harmonic", about = "Estimate harmonic numbers H(n) in O(log n) blocks")]
struct Cli {
    /// Argument n (prompted on stdin when omitted).
    n: Option<u64>,
    /// Geometric-series terms per block.
    #[arg(long, default_value_t = TERMS)]
    terms: usize,
    /// Below this n the sum is computed term by term.
    #[arg(long, default_value_t = DIRECT_CUTOFF)]
    cutoff: u64,
    /// Decimal places in the printed result.
    #[arg(long, default_value_t = 10)]
    precision: usize,
    /// Print each approximated block.
    #[arg(long)]
    blocks: bool,
    /// Also compute the brute-force sum and report the difference (n ≤ 10^10).
    #[arg(long)]
    verify: bool,
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = EstimatorConfig {
        term_count: cli.terms,
        direct_cutoff: cli.cutoff,
        record_blocks: cli.blocks,
    };
    let estimator = HarmonicEstimator::new(config).context("invalid estimator configuration")?;

    let n = match cli.n {
        Some(n) => n,
        None => prompt_for_n()?,
    };
    if cli.verify {
        check_verify_bound(n)?;
    }

    let report = estimator.run(n);
    println!(
        "Approximate Harmonic({}) is {:.*}",
        n, cli.precision, report.value
    );

    if cli.blocks {
        print_blocks(&report);
    }

    if cli.verify {
        let direct = direct_harmonic(n);
        println!(
            "Direct Harmonic({}) is {:.*}\tdifference={:.3e}",
            n,
            cli.precision,
            direct,
            report.value - direct
        );
    }

    Ok(())
}

fn check_verify_bound(n: u64) -> Result<()> {
    if n > VERIFY_LIMIT {
        anyhow::bail!(
            "--verify sums every term; n = {} exceeds the limit {}",
            n,
            VERIFY_LIMIT
        );
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_for_n() -> Result<u64> {
    print!("Input an integer: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read n from stdin")?;

    let trimmed = line.trim();
    trimmed
        .parse()
        .with_context(|| format!("invalid integer '{}'", trimmed))
}

fn print_blocks(report: &HarmonicEstimate) {
    println!("direct terms: {}", report.direct_terms);
    let Some(blocks) = &report.blocks else {
        return;
    };
    for (idx, block) in blocks.iter().enumerate() {
        println!(
            "block {}\trange=[{}, {}]\tratio={:.6}\tvalue={:.15}{}",
            idx + 1,
            block.range.start(),
            block.range.end(),
            block.ratio,
            block.value,
            if block.is_tail { "\ttail" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_bound() {
        assert!(check_verify_bound(0).is_ok());
        assert!(check_verify_bound(VERIFY_LIMIT).is_ok());
        assert!(check_verify_bound(VERIFY_LIMIT + 1).is_err());
        assert!(check_verify_bound(u64::MAX).is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["harmonic", "100000", "--verify", "--blocks"]).unwrap();
        assert_eq!(cli.n, Some(100_000));
        assert!(cli.verify && cli.blocks);
        assert_eq!(cli.terms, TERMS);
        assert_eq!(cli.cutoff, DIRECT_CUTOFF);
    }
}
