//! The fetch loop: bring every catalog slot on disk up to date, one request at a time.
//!
//! Per file:
//! - absent → fetch → written | failed
//! - present and valid → skipped
//! - primary present but undersized → fetch → written | failed
//!
//! Failures never abort the run. Each URL is tried once; the next run picks up
//! whatever is still missing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::{self, HttpOptions};
use crate::pacer::Pacer;
use crate::slot::{self, Decision, FetchReason, SlotKind, MAX_SLOTS};
use crate::storage;

/// Knobs for one fetcher instance.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub min_primary_bytes: u64,
    pub request_delay: Duration,
    pub max_images_per_item: usize,
    pub http: HttpOptions,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for FetchOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            min_primary_bytes: cfg.min_primary_bytes,
            request_delay: cfg.request_delay(),
            max_images_per_item: cfg.max_images_per_item,
            http: cfg.http_options(),
        }
    }
}

/// Progress notifications, emitted as each slot is settled.
#[derive(Debug)]
pub enum FetchEvent<'a> {
    Downloaded {
        key: &'a str,
        file_name: &'a str,
        bytes: usize,
        reason: FetchReason,
    },
    Failed {
        key: &'a str,
        file_name: &'a str,
        error: &'a FetchError,
    },
    Skipped {
        key: &'a str,
        file_name: &'a str,
        len: u64,
    },
    /// The key has no URL entry in the catalog.
    MissingUrls { key: &'a str },
}

/// Counts for a single key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub downloaded: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl Tally {
    /// Number of HTTP requests issued.
    pub fn attempts(&self) -> u32 {
        self.downloaded + self.failed
    }
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: u32,
    pub failed: u32,
    pub skipped: u32,
    /// Keys requested but absent from the URL table, in encounter order.
    pub missing: Vec<String>,
}

impl RunSummary {
    fn add(&mut self, t: Tally) {
        self.downloaded += t.downloaded;
        self.failed += t.failed;
        self.skipped += t.skipped;
    }
}

pub struct Fetcher {
    opts: FetchOptions,
    pacer: Pacer,
}

impl Fetcher {
    pub fn new(opts: FetchOptions) -> Self {
        let pacer = Pacer::new(opts.request_delay);
        Self { opts, pacer }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }

    /// Make sure every slot for `key` holds downloaded content, fetching only
    /// what is missing (or, for the primary, undersized).
    ///
    /// The request delay bounds the request rate: consecutive request starts
    /// are at least `request_delay` apart, so a request slower than the delay
    /// is followed by no extra pause.
    pub fn ensure(
        &mut self,
        key: &str,
        urls: &[String],
        base_dir: &Path,
        on_event: &mut dyn FnMut(&FetchEvent<'_>),
    ) -> Tally {
        let mut tally = Tally::default();
        let max = self.opts.max_images_per_item.min(MAX_SLOTS);

        for s in slot::slots(key, urls, base_dir, max) {
            let state = slot::inspect(&s.path);
            let reason = match s.decide(state, self.opts.min_primary_bytes) {
                Decision::Skip => {
                    let len = match state {
                        slot::SlotState::Present { len } => len,
                        slot::SlotState::Absent => 0,
                    };
                    tracing::debug!(key, file = s.file_name(), len, "present, skipping");
                    tally.skipped += 1;
                    on_event(&FetchEvent::Skipped {
                        key,
                        file_name: s.file_name(),
                        len,
                    });
                    continue;
                }
                Decision::Fetch(reason) => reason,
            };

            if let FetchReason::Undersized { len } = reason {
                tracing::info!(
                    key,
                    file = s.file_name(),
                    len,
                    min = self.opts.min_primary_bytes,
                    "primary image undersized, fetching again"
                );
            }

            self.pacer.wait();
            match self.fetch_one(s.url, &s.path) {
                Ok(bytes) => {
                    tracing::info!(key, file = s.file_name(), bytes, "downloaded");
                    tally.downloaded += 1;
                    on_event(&FetchEvent::Downloaded {
                        key,
                        file_name: s.file_name(),
                        bytes,
                        reason,
                    });
                }
                Err(error) => {
                    tracing::warn!(
                        key,
                        file = s.file_name(),
                        url = s.url,
                        kind = ?error.kind(),
                        primary = matches!(s.kind, SlotKind::Primary),
                        "download failed: {}",
                        error
                    );
                    tally.failed += 1;
                    on_event(&FetchEvent::Failed {
                        key,
                        file_name: s.file_name(),
                        error: &error,
                    });
                }
            }
        }
        tally
    }

    /// Process `keys` (or every catalog item, in catalog order, when `None`).
    ///
    /// Creating `base_dir` is the only fatal step; it happens before any request.
    pub fn run(
        &mut self,
        catalog: &Catalog,
        keys: Option<&[String]>,
        base_dir: &Path,
        on_event: &mut dyn FnMut(&FetchEvent<'_>),
    ) -> Result<RunSummary> {
        fs::create_dir_all(base_dir)
            .with_context(|| format!("create target directory {}", base_dir.display()))?;

        let keys = keys.unwrap_or_else(|| catalog.items());
        tracing::info!(
            base_dir = %base_dir.display(),
            items = keys.len(),
            "starting fetch run"
        );

        let mut summary = RunSummary::default();
        for key in keys {
            let Some(urls) = catalog.urls(key) else {
                tracing::warn!(key = key.as_str(), "no URLs defined");
                on_event(&FetchEvent::MissingUrls { key });
                summary.missing.push(key.clone());
                continue;
            };
            let tally = self.ensure(key, urls, base_dir, on_event);
            summary.add(tally);
        }

        tracing::info!(
            downloaded = summary.downloaded,
            failed = summary.failed,
            skipped = summary.skipped,
            missing = summary.missing.len(),
            "fetch run complete"
        );
        Ok(summary)
    }

    fn fetch_one(&self, url: &str, path: &Path) -> Result<usize, FetchError> {
        let body = http::get(url, &self.opts.http)?;
        storage::write_replace(path, &body).map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(body.len())
    }
}
