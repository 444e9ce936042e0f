use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "site-carousel")]
#[command(about = "Preview the month-by-month gallery and talks table of the site")]
pub struct CliConfig {
    /// Path to the site TOML configuration
    #[arg(short, long, default_value = "site.toml")]
    pub config: String,

    /// Number of auto-advance cycles to run before exiting
    #[arg(long, default_value = "3")]
    pub cycles: usize,

    /// Show the gallery and talks without starting the timer
    #[arg(long)]
    pub dry_run: bool,

    /// Emit JSON logs instead of compact text
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
