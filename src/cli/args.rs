use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "avatarcrop")]
#[command(version, about = "Extract trimmed avatar sprites from a sprite sheet", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract the explorer and spec sprites from a sheet
    Extract(ExtractArgs),
    /// Write a starter config file
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Source sprite sheet (PNG with alpha)
    #[arg(required_unless_present = "config")]
    pub source: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for sprite files [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep N pixels of transparent border after trimming [default: 0]
    #[arg(long)]
    pub trim_margin: Option<u32>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the config file
    pub path: PathBuf,

    /// Source sprite sheet to record in the config
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output directory to record in the config
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
