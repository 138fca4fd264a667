//! Offline view of the target directory: what a run would fetch or skip.

use anyhow::Result;
use std::path::Path;

use crate::catalog::Catalog;
use crate::checksum;
use crate::slot::{self, Decision, SlotKind, SlotState, MAX_SLOTS};

#[derive(Debug, Clone)]
pub struct SlotReport {
    pub key: String,
    pub file_name: String,
    pub kind: SlotKind,
    pub state: SlotState,
    pub decision: Decision,
    /// Only filled for present files when checksums were requested.
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    pub slots: Vec<SlotReport>,
    pub missing: Vec<String>,
}

impl StatusReport {
    /// Slots a run would request right now.
    pub fn pending(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.decision, Decision::Fetch(_)))
            .count()
    }
}

/// Walks the same slots as `Fetcher::run` without touching the network.
pub fn inspect(
    catalog: &Catalog,
    keys: Option<&[String]>,
    base_dir: &Path,
    min_primary_bytes: u64,
    max_images_per_item: usize,
    with_checksum: bool,
) -> Result<StatusReport> {
    let mut report = StatusReport::default();
    let keys = keys.unwrap_or_else(|| catalog.items());
    let max = max_images_per_item.min(MAX_SLOTS);

    for key in keys {
        let Some(urls) = catalog.urls(key) else {
            report.missing.push(key.clone());
            continue;
        };
        for s in slot::slots(key, urls, base_dir, max) {
            let state = slot::inspect(&s.path);
            let sha256 = match state {
                SlotState::Present { .. } if with_checksum => {
                    Some(checksum::sha256_path(&s.path)?)
                }
                _ => None,
            };
            report.slots.push(SlotReport {
                key: key.clone(),
                file_name: s.file_name().to_string(),
                kind: s.kind,
                state,
                decision: s.decide(state, min_primary_bytes),
                sha256,
            });
        }
    }
    Ok(report)
}
