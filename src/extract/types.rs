use std::path::PathBuf;

use crate::cli::CompressionLevel;
use crate::sprite::{Rect, RegionRule};

/// Settings for a single extraction run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Sprite sheet to read
    pub source: PathBuf,
    /// Directory receiving one PNG per job
    pub output_dir: PathBuf,
    /// Transparent border kept around each trimmed sprite
    pub trim_margin: u32,
    pub compress: Option<CompressionLevel>,
}

impl ExtractConfig {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            trim_margin: 0,
            compress: None,
        }
    }
}

/// A named sprite to cut out of the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractJob {
    pub name: String,
    /// File name written inside the output directory
    pub file_name: String,
    pub rule: RegionRule,
}

impl ExtractJob {
    pub fn new(name: &str, file_name: &str, rule: RegionRule) -> Self {
        Self {
            name: name.to_string(),
            file_name: file_name.to_string(),
            rule,
        }
    }
}

/// The explorer sprite sits in the lower-left half of the sheet and the spec
/// sprite in the lower-right half.
pub fn default_jobs() -> Vec<ExtractJob> {
    vec![
        ExtractJob::new("explorer", "explorer_m.png", RegionRule::LowerLeft),
        ExtractJob::new("spec", "spec_m.png", RegionRule::LowerRight),
    ]
}

/// What happened to one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Saved {
        name: String,
        path: PathBuf,
        /// Region in sheet coordinates
        region: Rect,
        /// Kept rectangle relative to `region`
        bbox: Rect,
        width: u32,
        height: u32,
    },
    Skipped {
        name: String,
        region: Rect,
        reason: SkipReason,
    },
}

impl JobOutcome {
    pub fn name(&self) -> &str {
        match self {
            JobOutcome::Saved { name, .. } | JobOutcome::Skipped { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Every pixel in the region has zero alpha
    NoOpaqueContent,
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub source_width: u32,
    pub source_height: u32,
    pub outcomes: Vec<JobOutcome>,
}

impl ExtractReport {
    pub fn saved(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, JobOutcome::Saved { .. }))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, JobOutcome::Skipped { .. }))
    }

    pub fn outcome(&self, name: &str) -> Option<&JobOutcome> {
        self.outcomes.iter().find(|o| o.name() == name)
    }
}
