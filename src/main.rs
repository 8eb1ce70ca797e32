use clap::Parser;
use env_logger::Env;
use itertools::Itertools;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use box_heuristics::config::{load_state, ConfigError, EvalConfig};
use box_heuristics::error::Error;
use box_heuristics::heuristic::Estimator;
use box_heuristics::state::State;
use box_heuristics::strategy::StrategyKind;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file with strategy, estimator and weight. Flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluation strategy combining path cost and estimate.
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Remaining-cost estimator.
    #[arg(short, long, value_enum)]
    estimator: Option<Estimator>,

    /// When using wastar, weight applied to the estimate.
    #[arg(short, long)]
    weight: Option<i64>,

    /// Also print the raw estimate of every estimator for each state.
    #[arg(long)]
    all_estimators: bool,

    /// State snapshots (JSON). Goals are indexed from the first one.
    #[arg(required = true)]
    states: Vec<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<EvalConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => EvalConfig::load(path)?,
        None => {
            info!("Using default evaluation config.");
            EvalConfig::default()
        },
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(estimator) = cli.estimator {
        config.estimator = estimator;
    }
    if cli.weight.is_some() {
        config.weight = cli.weight;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let config = load_config(cli)?;
    let states = cli.states.iter()
        .map(|path| load_state(path))
        .collect::<Result<Vec<State>, ConfigError>>()?;
    // Non-empty, clap requires at least one state.
    let initial = &states[0];
    let heuristic = config.build_heuristic(initial)?;
    let goals = heuristic.goals().clone();
    let strategy = config.build_strategy(heuristic)?;
    for (path, state) in cli.states.iter().zip(&states) {
        if state.boxes.dimensions() != goals.dimensions()
            || state.goals.dimensions() != goals.dimensions() {
            return Err(Error::MalformedConfiguration(format!(
                "{} does not match the initial grid dimensions {:?}",
                path.display(), goals.dimensions())).into());
        }
    }

    println!("{}", strategy.describe());
    if cli.all_estimators {
        println!("{:<40} | {:>6} | {:>6} | {}", "State", "g", "f",
                 Estimator::ALL.iter().join(" | "));
    }
    for (path, state) in cli.states.iter().zip(&states) {
        let f = strategy.evaluate(state);
        if cli.all_estimators {
            let estimates = Estimator::ALL.iter()
                .map(|estimator| format!("{:>width$}",
                                         estimator.estimate(&goals, state),
                                         width = estimator.name().len()))
                .join(" | ");
            println!("{:<40} | {:>6} | {:>6} | {}",
                     path.display(), state.g, f, estimates);
        } else {
            println!("{}: f = {} (g = {})", path.display(), f, state.g);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();
    // Init logger with default value of info
    // This can be overriden with RUST_LOG env var
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Evaluation failed with underlying error:");
            error!("  {}", err);
            if let ConfigError::ReadError(_) | ConfigError::ParseError(_) = err {
                error!("  {:?}", err);
            }
            ExitCode::FAILURE
        },
    }
}
