//! Runtime configuration utilities for ab-scope.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::stats::{AnalysisOptions, DEFAULT_MIN_SAMPLE};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root folder holding split-test feeds.
    pub data_dir: PathBuf,
    /// Root folder for exported reports.
    pub outputs_dir: PathBuf,
    /// Per-group trial count required for a comparison to count as adequately sampled.
    pub min_sample: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            outputs_dir: PathBuf::from("./outputs"),
            min_sample: DEFAULT_MIN_SAMPLE,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.outputs_dir);
        let min_sample = env::var("MIN_SAMPLE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_sample);

        Ok(Self {
            data_dir,
            outputs_dir,
            min_sample,
        })
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            min_sample: self.min_sample,
        }
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
