mod extractor;
mod types;

pub use extractor::SpriteExtractor;
pub use types::{
    ExtractConfig, ExtractJob, ExtractReport, JobOutcome, SkipReason, default_jobs,
};
