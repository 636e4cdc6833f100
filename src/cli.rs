use clap::Parser;

use crate::config::{Config, DEFAULT_URL};
use crate::form::SubmitForm;

#[derive(Parser)]
#[command(name = "evobench")]
#[command(version)]
#[command(about = "Submit vote-shuffle benchmark queries to an evo server and watch the timings")]
pub struct Args {
    /// Number of simulated votes per query (free text; anything non-numeric
    /// counts as 0)
    pub count: Option<String>,

    /// Benchmark the Neff shuffle instead of the Sato-Kilian shuffle
    #[arg(long)]
    pub neff: bool,

    /// Ask the server to run the shuffle rounds in parallel
    #[arg(long, short)]
    pub parallelize: bool,

    /// Server endpoint, e.g. ws://localhost:8000/ws
    #[arg(long)]
    pub url: Option<String>,

    /// Path to a TOML config file (./evobench.toml is probed by default)
    #[arg(long)]
    pub config: Option<String>,

    /// Submit a single query, print the first result, and exit
    #[arg(long)]
    pub once: bool,

    /// Suppress the interactive banner
    #[arg(long, short)]
    pub quiet: bool,
}

/// Endpoint to connect to: CLI flag, then config file, then the default.
pub fn resolve_url(args: &Args, cfg: &Config) -> String {
    args.url
        .clone()
        .or_else(|| cfg.server.url.clone())
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

/// Initial form state: CLI values over config-file defaults. The bool flags
/// can only turn their fields on — absence falls back to the file.
pub fn resolve_form(args: &Args, cfg: &Config) -> SubmitForm {
    SubmitForm {
        count: args
            .count
            .clone()
            .or_else(|| cfg.form.count.map(|n| n.to_string()))
            .unwrap_or_else(|| "0".to_string()),
        neff: args.neff || cfg.form.neff.unwrap_or(false),
        parallelize: args.parallelize || cfg.form.parallelize.unwrap_or(false),
    }
}
