pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod sprite;

pub use error::ExtractError;
pub use extract::{ExtractConfig, ExtractJob, ExtractReport, JobOutcome, SpriteExtractor};
pub use sprite::{Rect, RegionRule};
