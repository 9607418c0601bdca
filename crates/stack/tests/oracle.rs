//! Randomized oracle-equivalence harness.
//!
//! Drives a [`TreeStack`] and the naive reference stack through the same
//! random mixture of append, pop, and suffix-check operations, asserting
//! after every step that the two agree on length, contents, reverse
//! iteration, and the top entry.
//!
//! The run is configured through the environment:
//!
//! | Variable        | Default | Meaning                                        |
//! |-----------------|---------|------------------------------------------------|
//! | `MAX_PUSH`      | 1024    | Upper bound on elements pushed per append      |
//! | `POP_RATIO`     | 2       | Pop counts are `rand(0..=len) / POP_RATIO`     |
//! | `RANDOM_COUNT`  | 1024    | Number of operations per run                   |
//! | `RANDOM_SEED`   | 0       | RNG seed of the env-configured run             |
//! | `PRINT_OPS`     | unset   | Print each operation (also enables op tracing) |
//! | `PRINT_VECS`    | unset   | Print both stacks' contents after each step    |
//! | `NO_LOG_CONFIG` | unset   | Don't echo parsed integer configuration        |

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::env;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use treestack::{IndexedSeq, NaiveStack, NodeArena, TreeStack};

/// Failure to parse a harness environment variable.
#[derive(Debug, Error)]
#[error("invalid value {value:?} for {var}")]
struct ConfigError {
    var: &'static str,
    value: String,
    #[source]
    source: std::num::ParseIntError,
}

#[derive(Debug)]
struct HarnessConfig {
    print_ops: bool,
    print_vecs: bool,
    max_push: usize,
    pop_ratio: usize,
    random_count: usize,
    seed: u64,
}

impl HarnessConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let log = env::var_os("NO_LOG_CONFIG").is_none();
        Ok(Self {
            print_ops: env::var_os("PRINT_OPS").is_some(),
            print_vecs: env::var_os("PRINT_VECS").is_some(),
            max_push: integer("MAX_PUSH", 1024, log)? as usize,
            pop_ratio: integer("POP_RATIO", 2, log)? as usize,
            random_count: integer("RANDOM_COUNT", 1024, log)? as usize,
            seed: integer("RANDOM_SEED", 0, log)?,
        })
    }
}

fn integer(var: &'static str, default: u64, log: bool) -> Result<u64, ConfigError> {
    let Some(value) = env::var_os(var) else { return Ok(default) };
    let value = value.to_string_lossy().into_owned();
    let parsed = value
        .parse::<u64>()
        .map_err(|source| ConfigError { var, value: value.clone(), source })?;
    if log {
        eprintln!("{var}={parsed}");
    }
    Ok(parsed)
}

/// Installs a subscriber honoring `RUST_LOG`; `PRINT_OPS` defaults the
/// filter to per-operation tracing from the stack itself.
fn init_tracing(config: &HarnessConfig) {
    let fallback = if config.print_ops { "treestack=trace" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn run_randomized(config: &HarnessConfig, seed: u64, op_count: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arena = NodeArena::new();
    let mut stack = TreeStack::new();
    let mut oracle: NaiveStack<i32> = NaiveStack::new();

    for step in 0..op_count {
        match rng.random_range(0..3u32) {
            0 if !oracle.is_empty() => {
                let count = rng.random_range(0..=oracle.len()) / config.pop_ratio;
                if config.print_ops {
                    eprintln!("popping {count}");
                }
                stack.pop(&arena, count);
                oracle.pop(count);
            }
            2 if !oracle.is_empty() => {
                let count = rng.random_range(0..=oracle.len());
                if config.print_ops {
                    eprintln!("checking suffix of {count}");
                }
                let suffix = oracle.as_slice()[oracle.len() - count..].to_vec();
                assert!(oracle.has_suffix(&suffix));
                let query = IndexedSeq::from_leaves(&mut arena, &suffix);
                assert!(
                    stack.has_suffix(&arena, &query),
                    "seed {seed} step {step}: exact suffix of {count} must match",
                );

                // A corrupted copy of the same suffix must not match.
                if count > 0 {
                    let mut corrupted = suffix;
                    corrupted[0] = (corrupted[0] + 1) % 128;
                    let query = IndexedSeq::from_leaves(&mut arena, &corrupted);
                    assert!(
                        !stack.has_suffix(&arena, &query),
                        "seed {seed} step {step}: corrupted suffix of {count} must not match",
                    );
                }
            }
            _ => {
                let count = rng.random_range(0..=config.max_push);
                if config.print_ops {
                    eprintln!("appending {count}");
                }
                let values: Vec<i32> = (0..count).map(|_| rng.random_range(0..128)).collect();
                let seq = IndexedSeq::from_leaves(&mut arena, &values);
                stack.append(&mut arena, &seq);
                oracle.append(&values);
            }
        }

        assert_eq!(stack.len(), oracle.len(), "seed {seed} step {step}: lengths diverged");
        if config.print_vecs {
            eprintln!("expected: {:?}", oracle.as_slice());
            eprintln!("  actual: {:?}", stack.to_vec(&arena));
        }
        let reversed: Vec<i32> = stack.iter_rev(&arena).collect();
        let expected: Vec<i32> = oracle.iter_rev().collect();
        assert_eq!(reversed, expected, "seed {seed} step {step}: contents diverged");
        if !oracle.is_empty() {
            assert_eq!(stack.back(&arena), oracle.back(), "seed {seed} step {step}");
        }
    }
}

#[test]
fn randomized_ops_match_naive_stack() {
    let config = HarnessConfig::from_env().expect("invalid harness configuration");
    init_tracing(&config);
    run_randomized(&config, config.seed, config.random_count);
}

#[test]
fn randomized_ops_match_across_seeds() {
    let config = HarnessConfig {
        print_ops: false,
        print_vecs: false,
        max_push: 64,
        pop_ratio: 2,
        random_count: 0,
        seed: 0,
    };
    for seed in 1..=4 {
        run_randomized(&config, seed, 256);
    }
}
