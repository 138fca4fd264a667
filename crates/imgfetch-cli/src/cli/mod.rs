//! CLI for the imgfetch product image fetcher.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use imgfetch_core::config::{self, FetchConfig};
use imgfetch_core::Catalog;
use std::path::{Path, PathBuf};

use commands::{run_catalog, run_fetch, run_status};

/// Top-level CLI for imgfetch.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "imgfetch: download missing product images into a local directory", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/imgfetch/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to write images and which catalog to read.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Directory for the images (overrides `base_dir` from the config).
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// TOML catalog file (overrides `catalog_path` and the built-in table).
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every missing or undersized image.
    Run {
        /// Only process these catalog keys, in this order (default: whole catalog).
        keys: Vec<String>,

        #[command(flatten)]
        target: TargetArgs,

        /// Pause between requests in milliseconds (overrides `request_delay_ms`).
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,

        /// Exit non-zero if any download failed.
        #[arg(long)]
        strict: bool,
    },

    /// Show which files are present and what a run would fetch. No network access.
    Status {
        /// Only report these catalog keys.
        keys: Vec<String>,

        #[command(flatten)]
        target: TargetArgs,

        /// Include the SHA-256 of every present file.
        #[arg(long)]
        checksum: bool,
    },

    /// Print the effective catalog as TOML (the format `--catalog` accepts).
    Catalog {
        /// TOML catalog file to print instead of the configured one.
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                keys,
                target,
                delay_ms,
                strict,
            } => {
                let catalog = resolve_catalog(&cfg, target.catalog.as_deref())?;
                let base_dir = target.base_dir.unwrap_or_else(|| cfg.base_dir.clone());
                run_fetch(&cfg, &catalog, &keys, &base_dir, delay_ms, strict)?;
            }
            CliCommand::Status {
                keys,
                target,
                checksum,
            } => {
                let catalog = resolve_catalog(&cfg, target.catalog.as_deref())?;
                let base_dir = target.base_dir.unwrap_or_else(|| cfg.base_dir.clone());
                run_status(&cfg, &catalog, &keys, &base_dir, checksum)?;
            }
            CliCommand::Catalog { catalog } => {
                let catalog = resolve_catalog(&cfg, catalog.as_deref())?;
                run_catalog(&catalog)?;
            }
        }

        Ok(())
    }
}

/// `--catalog` wins over `catalog_path` from the config; neither means the built-in table.
fn resolve_catalog(cfg: &FetchConfig, flag: Option<&Path>) -> Result<Catalog> {
    match flag.or(cfg.catalog_path.as_deref()) {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Empty key list on the command line means "whole catalog".
fn key_filter(keys: &[String]) -> Option<&[String]> {
    if keys.is_empty() {
        None
    } else {
        Some(keys)
    }
}

#[cfg(test)]
mod tests;
