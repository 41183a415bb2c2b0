//! Command-line front end for the Elo rating calculator
//!
//! Computes one rating update per invocation and prints the result as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use elo_calc::config::AppConfig;
use elo_calc::{Outcome, PointsPolicy, RatingCalculator, RatingPair};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Elo rating calculator for two-participant matches
#[derive(Parser)]
#[command(
    name = "elo-calc",
    version,
    about = "Compute Elo rating updates from outcomes, scores or point totals",
    long_about = "elo-calc updates two ratings after a match. The result may be given as a \
                 win/loss/draw, as raw scores in [0, 1], or as point totals converted with the \
                 outcome, rationalize or margin policy."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// K-factor override
    #[arg(short, long, value_name = "K")]
    k_factor: Option<f64>,

    /// C-value override
    #[arg(long, value_name = "C")]
    c_value: Option<f64>,

    /// L-factor override
    #[arg(long, value_name = "L")]
    l_factor: Option<f64>,

    /// Print the rating deltas alongside the new ratings
    #[arg(long)]
    deltas: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Update ratings from a win, loss or draw (draw, a_won, b_won)
    #[command(allow_negative_numbers = true)]
    Outcome {
        rating_a: f64,
        rating_b: f64,
        outcome: Outcome,
    },
    /// Update ratings from raw scores in [0, 1]
    #[command(allow_negative_numbers = true)]
    Scores {
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        score_b: f64,
    },
    /// Update ratings from point totals
    #[command(allow_negative_numbers = true)]
    Points {
        rating_a: f64,
        rating_b: f64,
        points_a: f64,
        points_b: f64,
        /// Conversion policy (outcome, rationalize, margin)
        #[arg(short, long, default_value_t = PointsPolicy::Margin)]
        policy: PointsPolicy,
    },
}

impl Command {
    fn ratings(&self) -> (f64, f64) {
        match *self {
            Command::Outcome {
                rating_a, rating_b, ..
            }
            | Command::Scores {
                rating_a, rating_b, ..
            }
            | Command::Points {
                rating_a, rating_b, ..
            } => (rating_a, rating_b),
        }
    }
}

/// JSON report printed on success
#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    ratings: RatingPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    delta_a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delta_b: Option<f64>,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file (or defaults) and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::default(),
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }
    if let Some(c_value) = args.c_value {
        config.rating.c_value = c_value;
    }
    if let Some(l_factor) = args.l_factor {
        config.rating.l_factor = l_factor;
    }

    elo_calc::config::validate_config(&config)?;
    Ok(config)
}

fn run(args: &Args, calculator: &RatingCalculator) -> Result<RatingPair> {
    let result = match args.command {
        Command::Outcome {
            rating_a,
            rating_b,
            outcome,
        } => calculator.compute_from_outcome(rating_a, rating_b, outcome)?,
        Command::Scores {
            rating_a,
            rating_b,
            score_a,
            score_b,
        } => calculator.compute_from_scores(rating_a, rating_b, score_a, score_b)?,
        Command::Points {
            rating_a,
            rating_b,
            points_a,
            points_b,
            policy,
        } => {
            debug!("Using {} points policy", policy);
            calculator.compute_from_points(rating_a, rating_b, points_a, points_b, policy)?
        }
    };

    Ok(result)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Some(config_path) = &args.config {
        info!("Loaded configuration from: {}", config_path.display());
    }
    debug!(
        "{}: K={} C={} L={}",
        config.service.name, config.rating.k_factor, config.rating.c_value, config.rating.l_factor
    );

    let calculator = RatingCalculator::new(config.rating)?;

    let ratings = match run(&args, &calculator) {
        Ok(ratings) => ratings,
        Err(e) => {
            error!("Rating update rejected: {}", e);
            std::process::exit(2);
        }
    };

    let (old_a, old_b) = args.command.ratings();
    let (delta_a, delta_b) = ratings.deltas(old_a, old_b);
    let report = Report {
        ratings,
        delta_a: args.deltas.then_some(delta_a),
        delta_b: args.deltas.then_some(delta_b),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
