//! `imgfetch run` – fetch missing or undersized images.

use anyhow::Result;
use imgfetch_core::config::FetchConfig;
use imgfetch_core::{Catalog, FetchEvent, FetchOptions, Fetcher, RunSummary};
use std::path::Path;
use std::time::Duration;

use crate::cli::key_filter;

pub fn run_fetch(
    cfg: &FetchConfig,
    catalog: &Catalog,
    keys: &[String],
    base_dir: &Path,
    delay_ms: Option<u64>,
    strict: bool,
) -> Result<()> {
    let mut opts = FetchOptions::from(cfg);
    if let Some(ms) = delay_ms {
        opts.request_delay = Duration::from_millis(ms);
    }

    println!("Starting image download process...");
    println!("Target directory: {}", base_dir.display());

    let mut fetcher = Fetcher::new(opts);
    let summary = fetcher.run(catalog, key_filter(keys), base_dir, &mut |e: &FetchEvent<'_>| {
        if let Some(line) = event_line(e) {
            println!("{}", line);
        }
    })?;

    for line in summary_lines(&summary) {
        println!("{}", line);
    }

    if strict && summary.failed > 0 {
        anyhow::bail!("{} download(s) failed", summary.failed);
    }
    Ok(())
}

/// One progress line per attempt or warning; skips are silent.
pub(crate) fn event_line(e: &FetchEvent<'_>) -> Option<String> {
    match e {
        FetchEvent::Downloaded { file_name, .. } => Some(format!("✓ Downloaded: {}", file_name)),
        FetchEvent::Failed {
            file_name, error, ..
        } => Some(format!("✗ Failed to download {}: {}", file_name, error)),
        FetchEvent::MissingUrls { key } => Some(format!("⚠ No URLs defined for: {}", key)),
        FetchEvent::Skipped { .. } => None,
    }
}

pub(crate) fn summary_lines(s: &RunSummary) -> Vec<String> {
    vec![
        String::new(),
        "Download complete!".to_string(),
        format!("✓ Successfully downloaded: {} images", s.downloaded),
        format!("✗ Failed downloads: {} images", s.failed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgfetch_core::slot::FetchReason;
    use imgfetch_core::FetchError;

    #[test]
    fn progress_lines() {
        let ok = FetchEvent::Downloaded {
            key: "tomatoes",
            file_name: "tomatoes.jpg",
            bytes: 2048,
            reason: FetchReason::Missing,
        };
        assert_eq!(event_line(&ok).as_deref(), Some("✓ Downloaded: tomatoes.jpg"));

        let err = FetchError::Http(404);
        let failed = FetchEvent::Failed {
            key: "tomatoes",
            file_name: "tomatoes-2.jpg",
            error: &err,
        };
        assert_eq!(
            event_line(&failed).as_deref(),
            Some("✗ Failed to download tomatoes-2.jpg: HTTP 404")
        );

        let missing = FetchEvent::MissingUrls { key: "kale" };
        assert_eq!(event_line(&missing).as_deref(), Some("⚠ No URLs defined for: kale"));

        let skipped = FetchEvent::Skipped {
            key: "kale",
            file_name: "kale.jpg",
            len: 5000,
        };
        assert!(event_line(&skipped).is_none());
    }

    #[test]
    fn summary_reports_counts() {
        let s = RunSummary {
            downloaded: 3,
            failed: 1,
            ..RunSummary::default()
        };
        let lines = summary_lines(&s);
        assert_eq!(lines[2], "✓ Successfully downloaded: 3 images");
        assert_eq!(lines[3], "✗ Failed downloads: 1 images");
    }
}
