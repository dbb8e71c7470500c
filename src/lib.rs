//! A/B test significance and group ranking for campaign metrics.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod ranking;
pub mod stats;

pub use error::AnalysisError;
pub use ranking::{rank_groups, rank_groups_with, GroupEntry, RankingResult};
pub use stats::{run_analysis, run_analysis_with, AnalysisOptions, ComparisonResult};
