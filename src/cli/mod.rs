//! Command-line interface wiring for ab-scope.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Settings;

pub mod compare;
pub mod rank;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "A/B test significance for campaign metrics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Compare(args) => compare::run(args, settings).await,
            Commands::Rank(args) => rank::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two samples with a two-proportion z-test.
    Compare(compare::Args),
    /// Rank the groups of a split-test feed against the leader.
    Rank(rank::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}

/// Engagement count used as the success column; `delivered` is always the denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Unique opens.
    #[default]
    Opens,
    /// Unique clicks.
    Clicks,
}
