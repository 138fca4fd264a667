//! `imgfetch status` – what is on disk and what a run would fetch.

use anyhow::Result;
use imgfetch_core::config::FetchConfig;
use imgfetch_core::report::{self, SlotReport};
use imgfetch_core::slot::{Decision, FetchReason, SlotState};
use imgfetch_core::Catalog;
use std::path::Path;

use crate::cli::key_filter;

pub fn run_status(
    cfg: &FetchConfig,
    catalog: &Catalog,
    keys: &[String],
    base_dir: &Path,
    checksum: bool,
) -> Result<()> {
    let report = report::inspect(
        catalog,
        key_filter(keys),
        base_dir,
        cfg.min_primary_bytes,
        cfg.max_images_per_item,
        checksum,
    )?;

    println!("Target directory: {}", base_dir.display());
    println!("{:<32} {:<10} {:<10} {}", "FILE", "SIZE", "ACTION", "SHA256");
    for slot in &report.slots {
        println!("{}", slot_line(slot));
    }
    for key in &report.missing {
        println!("⚠ No URLs defined for: {}", key);
    }
    println!("{} file(s) would be fetched", report.pending());
    Ok(())
}

fn slot_line(s: &SlotReport) -> String {
    let size = match s.state {
        SlotState::Present { len } => len.to_string(),
        SlotState::Absent => "-".to_string(),
    };
    let action = match s.decision {
        Decision::Skip => "keep",
        Decision::Fetch(FetchReason::Missing) => "fetch",
        Decision::Fetch(FetchReason::Undersized { .. }) => "refetch",
    };
    format!(
        "{:<32} {:<10} {:<10} {}",
        s.file_name,
        size,
        action,
        s.sha256.as_deref().unwrap_or("-")
    )
}
