//! Command-line argument definitions for the stripe-map demo binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Cli defines the root command for the stripe-map demo binary.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Command enumerates the supported CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    Bench(BenchArgs),

    Churn(ChurnArgs),
}

/// `WorldArgs` shapes the synthetic 2D world both runs populate.
#[derive(Args, Debug, Clone)]
pub struct WorldArgs {
    #[arg(long, env = "SMAP_MAP_WIDTH", default_value_t = 500_000)]
    pub map_width: usize,

    #[arg(long, env = "SMAP_MAP_HEIGHT", default_value_t = 500_000)]
    pub map_height: usize,

    #[arg(long, env = "SMAP_ENTITIES", default_value_t = 5_000)]
    pub entities: usize,

    #[arg(long, env = "SMAP_RECT_SIZE", default_value_t = 350)]
    pub rect_size: i64,

    /// RNG seed; zero draws one from the OS.
    #[arg(long, env = "SMAP_SEED", default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = Placement::Uniform)]
    pub placement: Placement,
}

/// `BenchArgs` configures the broad-phase neighbor-search benchmark.
#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    #[command(flatten)]
    pub world: WorldArgs,

    #[arg(long, default_value_t = 10)]
    pub passes: usize,

    #[arg(long, default_value_t = 1_000)]
    pub stripes: usize,

    #[arg(long, default_value_t = 8)]
    pub slot_width: usize,

    /// Depth-window half-width for the neighbor scan.
    #[arg(long, default_value_t = 1_000)]
    pub radius: usize,

    #[arg(long, value_enum, default_value_t = CheckMode::Radius)]
    pub check: CheckMode,
}

/// `CheckMode` selects the narrow-phase overlap test the benchmark applies
/// to candidates inside the depth window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CheckMode {
    Radius,
    Square,
}

/// `ChurnArgs` configures the mutation-heavy exercise run.
#[derive(Args, Debug, Clone)]
pub struct ChurnArgs {
    #[command(flatten)]
    pub world: WorldArgs,

    #[arg(long, default_value_t = 20)]
    pub rounds: usize,

    #[arg(long, default_value_t = 64)]
    pub stripes: usize,

    #[arg(long, default_value_t = 8)]
    pub slot_width: usize,
}

/// `Placement` selects how rectangles spread over the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Placement {
    Uniform,
    Clustered,
}
