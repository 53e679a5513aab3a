use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use avatarcrop::cli::{CliArgs, Command, ExtractArgs, InitArgs};
use avatarcrop::config::{CropConfig, LoadedConfig, make_relative, save_config};
use avatarcrop::extract::{ExtractConfig, SpriteExtractor};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match cli.command {
        Command::Extract(args) => extract(&args),
        Command::Init(args) => {
            init_logging(false);
            init(&args)
        }
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn extract(args: &ExtractArgs) -> Result<()> {
    let config = merge_config_with_args(args)?;

    init_logging(args.verbose);
    info!("avatarcrop v{}", env!("CARGO_PKG_VERSION"));

    let report = SpriteExtractor::new(config).run()?;
    info!(
        "{} of {} sprites written",
        report.saved().count(),
        report.outcomes.len()
    );

    Ok(())
}

fn init(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    let base = args
        .path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = CropConfig::default();
    if let Some(source) = &args.source {
        config.source = Some(make_relative(source, &base));
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = make_relative(output_dir, &base);
    }

    save_config(&config, &args.path)?;
    info!("Wrote {}", args.path.display());

    Ok(())
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &ExtractArgs) -> Result<ExtractConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Source: CLI > config
    let source = args
        .source
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_source))
        .context("no source image given on the command line or in the config file")?;

    // Output directory: CLI > config > default
    let output_dir = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_output_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let trim_margin = args.trim_margin.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.trim_margin)
            .unwrap_or(0)
    });

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        match &lc.config.compress {
            Some(c) => Some(c.to_level().ok_or_else(|| {
                anyhow::anyhow!(
                    "invalid compress value {:?} in config file. Valid values: 0-6, \"max\"",
                    c
                )
            })?),
            None => None,
        }
    } else {
        None
    };

    Ok(ExtractConfig {
        source,
        output_dir,
        trim_margin,
        compress,
    })
}
