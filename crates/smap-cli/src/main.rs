use anyhow::Result;
use clap::Parser;

mod cli;
mod geometry;
mod metrics_runtime;
mod simulator;
mod world;

use cli::{Cli, Command};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::metrics_runtime::MetricsCounters;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let counters = MetricsCounters::install();

    let result = match cli.command {
        Command::Bench(args) => simulator::run_bench(&args),
        Command::Churn(args) => simulator::run_churn(&args),
    };

    if let Some(counters) = counters {
        info!(
            "map maintenance: restripes={}, shrinks={}, removals={}, clears={}",
            counters.restripes(),
            counters.shrinks(),
            counters.removals(),
            counters.clears()
        );
    }

    result
}

fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();
}
