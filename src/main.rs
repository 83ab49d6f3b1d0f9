use std::error::Error;
use std::hint::black_box;
use std::time::{Duration, Instant};

use clap::Parser;
use latlng_distance::{distance, Algorithm, DistanceCache, DistanceError, Ellipsoid};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct AlgorithmError(Algorithm, #[source] DistanceError);

#[derive(Parser)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Latitude of the first point, in degrees
    lat1: f64,

    /// Longitude of the first point, in degrees
    lon1: f64,

    /// Latitude of the second point, in degrees
    lat2: f64,

    /// Longitude of the second point, in degrees
    lon2: f64,

    /// Algorithm to use (planar, spherical, hubeny or vincenty).
    /// If not provided, all algorithms are compared against vincenty.
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Reference ellipsoid (bessel, grs80 or wgs84)
    #[arg(short, long, default_value = "wgs84")]
    ellipsoid: Ellipsoid,

    /// Repeat every computation this many times and report the elapsed time
    #[arg(long, value_name = "TIMES")]
    bench: Option<u32>,

    /// Memoize results when benchmarking
    #[arg(long, requires = "bench")]
    cache: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    if let Some(times) = cli.bench {
        return bench(&cli, times);
    }

    match cli.algorithm {
        Some(algorithm) => {
            let d = compute(&cli, algorithm)?;
            println!("{algorithm} = {d:.6}");
        }

        None => compare(&cli)?,
    }

    Ok(())
}

fn compute(cli: &Cli, algorithm: Algorithm) -> Result<f64, AlgorithmError> {
    distance(cli.lat1, cli.lon1, cli.lat2, cli.lon2, algorithm, &cli.ellipsoid)
        .map_err(|e| AlgorithmError(algorithm, e))
}

/// Prints the result of every algorithm, see [comparison].
fn compare(cli: &Cli) -> Result<(), AlgorithmError> {
    for line in comparison(cli)? {
        println!("{line}");
    }
    Ok(())
}

/// Formats the result of every algorithm, together with its difference from [Algorithm::Vincenty].
/// If Vincenty fails, the error is logged and the differences are omitted.
fn comparison(cli: &Cli) -> Result<Vec<String>, AlgorithmError> {
    let mut lines = Vec::with_capacity(Algorithm::ALL.len());

    let reference = match compute(cli, Algorithm::Vincenty) {
        Ok(reference) => {
            let vincenty = Algorithm::Vincenty;
            lines.push(format!("{vincenty:<9} = {reference:.6} ({:.6})", 0.0));
            Some(reference)
        }

        Err(e) => {
            log::error!("{e}");
            None
        }
    };

    for algorithm in [Algorithm::Spherical, Algorithm::Hubeny, Algorithm::Planar] {
        let d = compute(cli, algorithm)?;
        lines.push(match reference {
            Some(reference) => format!("{algorithm:<9} = {d:.6} ({:.6})", d - reference),
            None => format!("{algorithm:<9} = {d:.6}"),
        });
    }

    Ok(lines)
}

fn bench(cli: &Cli, times: u32) -> Result<(), Box<dyn Error>> {
    let algorithms = match cli.algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };
    let cache = cli.cache.then(DistanceCache::new);

    log::info!(
        "running {times} iterations on the {} ellipsoid{}",
        cli.ellipsoid,
        if cache.is_some() { " with cache" } else { "" }
    );

    for algorithm in algorithms {
        let mut last = None;
        let start = Instant::now();

        for _ in 0..times {
            let d = match cache {
                Some(ref cache) => cache.get_or_compute(
                    black_box(cli.lat1),
                    black_box(cli.lon1),
                    black_box(cli.lat2),
                    black_box(cli.lon2),
                    algorithm,
                    &cli.ellipsoid,
                ),
                None => distance(
                    black_box(cli.lat1),
                    black_box(cli.lon1),
                    black_box(cli.lat2),
                    black_box(cli.lon2),
                    algorithm,
                    &cli.ellipsoid,
                ),
            };
            last = Some(black_box(d));
        }

        let elapsed = start.elapsed();
        match last {
            Some(Ok(d)) => {
                println!("{algorithm:<9} = {d:.6} [{}]", format_elapsed(elapsed, times))
            }
            Some(Err(e)) => log::error!("{}", AlgorithmError(algorithm, e)),
            None => {}
        }
    }

    if let Some(cache) = cache {
        log::info!("cache: {} hits, {} misses", cache.hits(), cache.misses());
    }

    Ok(())
}

fn format_elapsed(elapsed: Duration, times: u32) -> String {
    let per_call = elapsed.as_nanos() / u128::from(times.max(1));
    format!("{:.3} s total, {per_call} ns/call", elapsed.as_secs_f64())
}
