//! CLI entry-point for ranking the groups of a split-test feed.

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    cli::Metric,
    config::Settings,
    data,
    error::AnalysisError,
    ranking::{self, RankingResult},
};

/// Args for the `rank` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Feed file (.csv or .json); relative paths resolve against DATA_DIR when not found.
    #[arg(long)]
    pub input: PathBuf,
    /// Engagement column used as successes.
    #[arg(long, value_enum, default_value_t = Metric::Opens)]
    pub metric: Metric,
    /// Print the full ranking as JSON.
    #[arg(long)]
    pub json: bool,
    /// Write the comparisons as CSV under OUTPUTS_DIR.
    #[arg(long)]
    pub export: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let path = if args.input.exists() {
        args.input.clone()
    } else {
        settings.join_data(&args.input)
    };
    let groups = data::load_groups(&path, args.metric)?;

    let result = match ranking::rank_groups_with(&groups, &settings.analysis_options()) {
        Ok(result) => result,
        Err(AnalysisError::InsufficientGroups { found }) => {
            warn!(found, "not enough groups to rank");
            println!("Insufficient data: need at least 2 groups to compare (found {found}).");
            return Ok(());
        }
    };
    info!(best = %result.best.label, any_significant = result.any_significant, "ranking complete");

    if let Some(name) = &args.export {
        export_comparisons(&settings, name, &result)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }
    Ok(())
}

fn print_summary(result: &RankingResult) {
    println!("{:<4} {:<24} {:>10} {:>12} {:>8}", "#", "group", "successes", "trials", "rate");
    for (idx, group) in result.ranked.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>10} {:>12} {:>7.2}%",
            idx + 1,
            group.label,
            group.success_count,
            group.trial_count,
            group.rate
        );
    }
    println!();
    for cmp in &result.comparisons {
        println!(
            "{} vs {}: lift {:.2}%, z {:.4}, p {:.6}, winner {}",
            cmp.group_a,
            cmp.group_b,
            cmp.result.relative_lift,
            cmp.result.z_score,
            cmp.result.p_value,
            cmp.result.winner
        );
    }
    println!();
    if result.any_significant {
        println!(
            "{} leads with {} confidence.",
            result.best.label,
            result.confidence_level()
        );
    } else {
        println!("No group is statistically significantly better than the others yet.");
    }
    if !result.sample_adequate {
        println!("Some groups are below the minimum sample size; treat results as preliminary.");
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    group_a: &'a str,
    group_b: &'a str,
    rate_a: f64,
    rate_b: f64,
    z_score: f64,
    p_value: f64,
    ci_low: f64,
    ci_high: f64,
    relative_lift: f64,
    is_significant: bool,
    winner: String,
    sample_adequate: bool,
}

fn export_comparisons(settings: &Settings, name: &str, result: &RankingResult) -> Result<()> {
    let out_path = settings.join_output(name);
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file =
        File::create(&out_path).with_context(|| format!("creating {}", out_path.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for cmp in &result.comparisons {
        writer.serialize(ExportRow {
            group_a: &cmp.group_a,
            group_b: &cmp.group_b,
            rate_a: cmp.result.rate_a,
            rate_b: cmp.result.rate_b,
            z_score: cmp.result.z_score,
            p_value: cmp.result.p_value,
            ci_low: cmp.result.confidence_interval.low,
            ci_high: cmp.result.confidence_interval.high,
            relative_lift: cmp.result.relative_lift,
            is_significant: cmp.result.is_significant,
            winner: cmp.result.winner.to_string(),
            sample_adequate: cmp.result.sample_adequate,
        })?;
    }
    writer.flush()?;
    info!(path = %out_path.display(), rows = result.comparisons.len(), "wrote comparisons");
    Ok(())
}
