use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use rand::distr::{Distribution, Uniform};
use rowmat::{DenseMatrix, ZeroDimensionError};
use tracing::debug;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Build a dense demo matrix with the requested shape and fill.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Print the generated matrix and its transpose.
    #[arg(short, long)]
    verbose: bool,

    /// Repeat the fill this many times.
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Number of rows.
    #[arg(short = 'm', long, default_value_t = 3)]
    rows: usize,

    /// Number of columns.
    #[arg(short = 'n', long, default_value_t = 4)]
    cols: usize,

    /// Initialize the matrix with random values.
    #[arg(short, long)]
    random: bool,

    /// Minimal value for the random values.
    #[arg(long, default_value_t = -5)]
    min: i64,

    /// Maximal value for the random values.
    #[arg(long, default_value_t = 5)]
    max: i64,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.rows == 0 || args.cols == 0 {
        return Err(ZeroDimensionError.into());
    }

    println!("Rows = {} Cols = {}", args.rows, args.cols);

    let mut mat = DenseMatrix::<i64>::new(args.rows, args.cols);
    let mut rng = rand::rng();
    for round in 0..args.repeat {
        if args.random {
            let between = Uniform::new_inclusive(args.min, args.max)?;
            mat.fill_with(|| between.sample(&mut rng));
        } else {
            mat.fill_iota();
        }
        debug!(round, size = mat.size(), random = args.random, "filled matrix");
    }

    if args.verbose {
        print!("{mat}");
        print!("{}", mat.transpose());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help output and usage errors both exit 1.
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Error messages go to stdout, where callers scrape them.
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
