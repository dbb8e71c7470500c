//! CLI entry-point for a single two-sample comparison.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, stats};

/// Args for the `compare` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Successes in group A (e.g. unique opens).
    #[arg(long)]
    pub success_a: u64,
    /// Trials in group A (e.g. delivered).
    #[arg(long)]
    pub trials_a: u64,
    /// Successes in group B.
    #[arg(long)]
    pub success_b: u64,
    /// Trials in group B.
    #[arg(long)]
    pub trials_b: u64,
    /// Print the full result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let result = stats::run_analysis_with(
        args.success_a,
        args.trials_a,
        args.success_b,
        args.trials_b,
        &settings.analysis_options(),
    );
    info!(p_value = result.p_value, winner = %result.winner, "comparison complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("rate A          {:.2}%", result.rate_a);
    println!("rate B          {:.2}%", result.rate_b);
    println!("z-score         {:.4}", result.z_score);
    println!("p-value         {:.6}", result.p_value);
    println!(
        "95% CI (diff)   [{:.6}, {:.6}]",
        result.confidence_interval.low, result.confidence_interval.high
    );
    println!("relative lift   {:.2}%", result.relative_lift);
    println!("significant     {}", result.is_significant);
    println!("winner          {}", result.winner);
    if !result.sample_adequate {
        println!(
            "warning: fewer than {} trials in at least one group",
            settings.min_sample
        );
    }
    Ok(())
}
