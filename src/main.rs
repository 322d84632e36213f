//! Writes randomized conformance vectors for a big-integer library.
//!
//! With no arguments, every operation gets 1000 vectors in the current
//! directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bignum_vectors::{Config, Op, NUM_TESTS};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gen-vectors")]
#[command(version)]
#[command(about = "Generate big-integer test vectors", long_about = None)]
struct Cli {
    /// Directory the .data files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Vectors per file
    #[arg(short = 'n', long, default_value_t = NUM_TESTS)]
    count: usize,

    /// Seed for reproducible output (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only generate these operations (add, sub, mul, rem, div, shr, shl, and, or, xor)
    #[arg(long = "op", value_name = "NAME")]
    ops: Vec<Op>,

    /// Generate each operation on its own thread
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let ops = if self.ops.is_empty() {
            Op::ALL.to_vec()
        } else {
            self.ops
        };

        Config {
            out_dir: self.out_dir,
            count: self.count,
            seed: self.seed,
            ops,
            parallel: self.parallel,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();

    let reports = bignum_vectors::run(&config)
        .with_context(|| format!("generating vectors in {}", config.out_dir.display()))?;

    for r in &reports {
        println!("{}\t{}", r.op, r.path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_everything() {
        let config = Cli::parse_from(["gen-vectors"]).into_config();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_flags() {
        let config = Cli::parse_from([
            "gen-vectors", "-o", "out", "-n", "10", "--seed", "42", "--op", "add", "--op", "shl",
            "--parallel",
        ])
        .into_config();

        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.count, 10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.ops, [Op::Add, Op::Shl]);
        assert!(config.parallel);
    }

    #[test]
    fn rejects_unknown_operations() {
        assert!(Cli::try_parse_from(["gen-vectors", "--op", "pow"]).is_err());
    }
}
