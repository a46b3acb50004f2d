//! CLI driver for the order-reconstruction attack
//!
//! Run with:
//!   cargo run --release --bin attack -- <n0> <n1> <p> [--seed N]
//!
//! `n0` and `n1` are the interior grid widths (positive integers), `p`
//! the percentage of responses the adversary observes (0-100). `--seed`
//! fixes the RNG for reproducible runs; without it the run is seeded
//! from entropy.
//!
//! Exit status is 1 when the reconstruction was exactly correct and 0
//! otherwise (including argument errors, which print a diagnostic).

use colored::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use range_recon::attack::{run_attack, AttackParams};
use std::process::ExitCode;

struct Args {
    n0: u32,
    n1: u32,
    p: u32,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = std::env::args().collect();

    let mut seed = None;
    let mut positional: Vec<&String> = Vec::new();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--seed" {
            let value = iter.next().ok_or("--seed requires a value")?;
            seed = Some(
                value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed {:?}", value))?,
            );
        } else {
            positional.push(arg);
        }
    }

    if positional.len() != 3 {
        return Err(format!(
            "expected 3 positional arguments <n0> <n1> <p>, got {}",
            positional.len()
        ));
    }

    let n0: u32 = positional[0]
        .parse()
        .map_err(|_| format!("invalid grid extent {:?}", positional[0]))?;
    let n1: u32 = positional[1]
        .parse()
        .map_err(|_| format!("invalid grid extent {:?}", positional[1]))?;
    if n0 == 0 || n1 == 0 {
        return Err("grid extents must be positive".to_string());
    }

    let p: u32 = positional[2]
        .parse()
        .map_err(|_| format!("invalid percentage {:?}", positional[2]))?;
    if p > 100 {
        return Err(format!("percentage {} out of range [0, 100]", p));
    }

    Ok(Args { n0, n1, p, seed })
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: attack <n0> <n1> <p> [--seed N]");
            return ExitCode::from(0);
        }
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let params = AttackParams {
        n0: args.n0,
        n1: args.n1,
        p: args.p,
        verbose: true,
    };
    let report = run_attack(&params, &mut rng);

    let verdict = if report.correct {
        "true".green().bold()
    } else {
        "false".red().bold()
    };
    println!(
        "observed {} responses in {} slices, {} reconstructed rows",
        report.observed_responses, report.slices, report.rows
    );
    println!("exactly correct: {}", verdict);
    println!("edge accuracy:   {:.4}", report.accuracy);
    println!(
        "reconstruction finished in {:.3} seconds",
        report.elapsed.as_secs_f64()
    );

    ExitCode::from(u8::from(report.correct))
}
