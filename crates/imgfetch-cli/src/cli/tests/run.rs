//! Tests for the run subcommand.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_run_defaults() {
    match parse(&["imgfetch", "run"]).command {
        CliCommand::Run {
            keys,
            target,
            delay_ms,
            strict,
        } => {
            assert!(keys.is_empty());
            assert!(target.base_dir.is_none());
            assert!(target.catalog.is_none());
            assert!(delay_ms.is_none());
            assert!(!strict);
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_keys_and_flags() {
    match parse(&[
        "imgfetch",
        "run",
        "tomatoes",
        "milk",
        "--base-dir",
        "/srv/images",
        "--catalog",
        "shop.toml",
        "--delay-ms",
        "0",
        "--strict",
    ])
    .command
    {
        CliCommand::Run {
            keys,
            target,
            delay_ms,
            strict,
        } => {
            assert_eq!(keys, vec!["tomatoes".to_string(), "milk".to_string()]);
            assert_eq!(target.base_dir.as_deref(), Some(Path::new("/srv/images")));
            assert_eq!(target.catalog.as_deref(), Some(Path::new("shop.toml")));
            assert_eq!(delay_ms, Some(0));
            assert!(strict);
        }
        _ => panic!("expected Run with flags"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = parse(&["imgfetch", "run", "--config", "/tmp/imgfetch.toml"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/imgfetch.toml")));
}
