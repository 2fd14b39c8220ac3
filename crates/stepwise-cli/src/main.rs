use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stepwise_core::domain::{Collaborator, RunSpec};
use stepwise_core::impls::{FunctionApproximator, LineWorld, Position};
use stepwise_core::ports::{SystemClock, UlidGenerator};
use stepwise_core::{AgentBuilder, Runner};

/// Drive an agent through a one-dimensional world and print the run report.
#[derive(Parser, Debug)]
#[command(name = "stepwise", version, about)]
struct Cli {
    /// JSON run spec; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of steps to run
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Replay history into the solver every N ticks (0 = only at the end)
    #[arg(short, long)]
    reevaluate_every: Option<u64>,

    /// Probability of a random choice
    #[arg(short, long)]
    exploration: Option<f64>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Left edge of the world
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    min: i64,

    /// Right edge of the world
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    max: i64,
}

impl Cli {
    fn run_spec(&self) -> anyhow::Result<RunSpec> {
        let mut spec = match &self.config {
            Some(path) => RunSpec::from_path(path)?,
            None => RunSpec::default(),
        };
        if let Some(ticks) = self.ticks {
            spec.max_ticks = ticks;
        }
        if let Some(every) = self.reevaluate_every {
            spec.reevaluate_every = Some(every);
        }
        if let Some(rate) = self.exploration {
            spec.approximator.exploration_rate = rate;
        }
        if self.seed.is_some() {
            spec.approximator.seed = self.seed;
        }
        Ok(spec)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let spec = cli.run_spec()?;

    // (A) 環境と推定器を用意（特徴量も報酬も位置 x）
    let world = LineWorld::new(cli.min, cli.max)?;
    let mut approximator =
        FunctionApproximator::new(spec.approximator.clone()).with_reward(|p: &Position| p.x as f64);
    approximator.add_value_function(approximator.create_value_function(|p: &Position| p.x as f64));

    // (B) Agent を構築（両方そろっていなければここで失敗）
    let mut agent = AgentBuilder::new()
        .problem(world)
        .solver(approximator)
        .expect(&[Collaborator::Problem, Collaborator::Solver])
        .build()?;

    // (C) 実行
    let runner = Runner::new(spec, SystemClock, UlidGenerator::new(SystemClock));
    let report = runner.run(&mut agent).context("run aborted")?;

    if let Some(solver) = agent.solver() {
        tracing::info!(weights = ?solver.weights(), "final value weights");
    }

    // (D) レポートを stdout へ
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
