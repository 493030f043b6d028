use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use q15vec::kernel::backend::{axpy_with_backend, Rounding};
use q15vec::kernel::dispatch::select_backend;
use q15vec::kernel::parallel::par_axpy_saturating_i16;
use q15vec::kernel::scalar::{madd, narrow_sat};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "q15vec-bench", version, about = "Benchmark saturating Q15 AXPY throughput")]
struct Args {
    /// Elements per vector
    #[arg(long, default_value_t = 1 << 20)]
    size: usize,

    /// Timed kernel invocations
    #[arg(long, default_value_t = 200)]
    iters: usize,

    /// Scalar multiplier
    #[arg(long, default_value_t = 3)]
    alpha: i16,

    /// RNG seed for input generation
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Threads (>1 runs the rayon variant in a dedicated pool)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Emit the report as JSON instead of a key=value line
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    backend: String,
    size: usize,
    iters: usize,
    threads: usize,
    elapsed_s: f64,
    melems_per_s: f64,
    verified: bool,
}

fn verify_against_oracle(a: &[i16], b: &[i16], y: &[i16], alpha: i16) -> Result<()> {
    for i in 0..a.len() {
        let want = narrow_sat(madd(a[i], alpha, b[i]), Rounding::Down);
        if y[i] != want {
            anyhow::bail!(
                "verification failed at index {}: got {}, want {}",
                i,
                y[i],
                want
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let a: Vec<i16> = (0..args.size).map(|_| rng.gen()).collect();
    let b: Vec<i16> = (0..args.size).map(|_| rng.gen()).collect();
    let mut y = vec![0i16; args.size];

    let backend = select_backend();
    let pool = if args.threads > 1 {
        Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(args.threads)
                .build()?,
        )
    } else {
        None
    };

    let pb = ProgressBar::new(args.iters as u64);
    let t0 = Instant::now();
    for _ in 0..args.iters {
        match &pool {
            Some(pool) => pool.install(|| par_axpy_saturating_i16(&a, &b, &mut y, args.alpha)),
            None => axpy_with_backend(backend, &a, &b, &mut y, args.alpha, Rounding::Down),
        }
        pb.inc(1);
    }
    let dt = t0.elapsed();
    pb.finish_and_clear();

    verify_against_oracle(&a, &b, &y, args.alpha)?;

    let elapsed_s = dt.as_secs_f64();
    let melems = (args.size as f64 * args.iters as f64) / 1.0e6;
    let report = Report {
        backend: backend.name().to_string(),
        size: args.size,
        iters: args.iters,
        threads: args.threads,
        elapsed_s,
        melems_per_s: if elapsed_s > 0.0 { melems / elapsed_s } else { 0.0 },
        verified: true,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "backend={} size={} iters={} threads={} elapsed={:.3}s melems_per_s={:.1}",
            report.backend,
            report.size,
            report.iters,
            report.threads,
            report.elapsed_s,
            report.melems_per_s
        );
    }
    Ok(())
}
