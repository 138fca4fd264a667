//! Target file slots: deterministic file names and the fetch/skip decision.
//!
//! Slot 1 is the primary image (`{key}.jpg`); slots 2..=5 are alternates
//! (`{key}-{n}.jpg`). Only the primary is subject to the size heuristic.

use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on slots per item: one primary plus four alternates.
pub const MAX_SLOTS: usize = 5;

/// Extension used for every target file.
pub const IMAGE_EXT: &str = "jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Primary,
    /// 1-based position in the URL list (2..=5).
    Alternate(usize),
}

impl SlotKind {
    fn for_index(index: usize) -> Self {
        if index == 0 {
            SlotKind::Primary
        } else {
            SlotKind::Alternate(index + 1)
        }
    }
}

/// One (URL, target path) pair for a catalog key.
#[derive(Debug, Clone)]
pub struct Slot<'a> {
    pub kind: SlotKind,
    pub url: &'a str,
    pub path: PathBuf,
}

/// What is on disk at a slot's target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Absent,
    Present { len: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchReason {
    Missing,
    /// Primary exists but is below the minimum size; treated as corrupt.
    Undersized { len: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fetch(FetchReason),
    Skip,
}

/// File name for a slot, e.g. `tomatoes.jpg` or `tomatoes-3.jpg`.
pub fn file_name(key: &str, kind: SlotKind) -> String {
    match kind {
        SlotKind::Primary => format!("{}.{}", key, IMAGE_EXT),
        SlotKind::Alternate(n) => format!("{}-{}.{}", key, n, IMAGE_EXT),
    }
}

/// Slots for `key`, one per URL, capped at `max_slots` (and at `MAX_SLOTS`).
pub fn slots<'a>(key: &str, urls: &'a [String], base_dir: &Path, max_slots: usize) -> Vec<Slot<'a>> {
    let cap = max_slots.clamp(1, MAX_SLOTS);
    urls.iter()
        .take(cap)
        .enumerate()
        .map(|(i, url)| {
            let kind = SlotKind::for_index(i);
            Slot {
                kind,
                url: url.as_str(),
                path: base_dir.join(file_name(key, kind)),
            }
        })
        .collect()
}

/// Stat the target. Anything that cannot be stat'ed counts as absent.
pub fn inspect(path: &Path) -> SlotState {
    match fs::metadata(path) {
        Ok(meta) => SlotState::Present { len: meta.len() },
        Err(_) => SlotState::Absent,
    }
}

impl Slot<'_> {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Absent files are always fetched. A present primary under
    /// `min_primary_bytes` is fetched again; a present alternate never is.
    pub fn decide(&self, state: SlotState, min_primary_bytes: u64) -> Decision {
        match (state, self.kind) {
            (SlotState::Absent, _) => Decision::Fetch(FetchReason::Missing),
            (SlotState::Present { len }, SlotKind::Primary) if len < min_primary_bytes => {
                Decision::Fetch(FetchReason::Undersized { len })
            }
            (SlotState::Present { .. }, _) => Decision::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{}.jpg", i)).collect()
    }

    #[test]
    fn file_names() {
        assert_eq!(file_name("tomatoes", SlotKind::Primary), "tomatoes.jpg");
        assert_eq!(file_name("green-tea", SlotKind::Alternate(2)), "green-tea-2.jpg");
    }

    #[test]
    fn slots_follow_url_order() {
        let u = urls(4);
        let s = slots("tomatoes", &u, Path::new("/imgs"), MAX_SLOTS);
        let names: Vec<_> = s.iter().map(|s| s.file_name().to_string()).collect();
        assert_eq!(
            names,
            ["tomatoes.jpg", "tomatoes-2.jpg", "tomatoes-3.jpg", "tomatoes-4.jpg"]
        );
        assert_eq!(s[0].kind, SlotKind::Primary);
        assert_eq!(s[3].kind, SlotKind::Alternate(4));
        assert_eq!(s[1].url, "https://example.com/1.jpg");
        assert_eq!(s[0].path, Path::new("/imgs/tomatoes.jpg"));
    }

    #[test]
    fn slots_capped_at_five() {
        let u = urls(8);
        assert_eq!(slots("milk", &u, Path::new("."), MAX_SLOTS).len(), 5);
        assert_eq!(slots("milk", &u, Path::new("."), 100).len(), 5);
        assert_eq!(slots("milk", &u, Path::new("."), 2).len(), 2);
        assert_eq!(slots("milk", &u, Path::new("."), 0).len(), 1);
    }

    #[test]
    fn primary_decisions() {
        let u = urls(1);
        let all = slots("eggs", &u, Path::new("."), MAX_SLOTS);
        let s = &all[0];
        assert_eq!(
            s.decide(SlotState::Absent, 1000),
            Decision::Fetch(FetchReason::Missing)
        );
        assert_eq!(
            s.decide(SlotState::Present { len: 999 }, 1000),
            Decision::Fetch(FetchReason::Undersized { len: 999 })
        );
        assert_eq!(s.decide(SlotState::Present { len: 1000 }, 1000), Decision::Skip);
    }

    #[test]
    fn alternates_skip_whenever_present() {
        let u = urls(2);
        let all = slots("eggs", &u, Path::new("."), MAX_SLOTS);
        let s = &all[1];
        assert_eq!(s.decide(SlotState::Present { len: 0 }, 1000), Decision::Skip);
        assert_eq!(
            s.decide(SlotState::Absent, 1000),
            Decision::Fetch(FetchReason::Missing)
        );
    }

    #[test]
    fn inspect_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("bread.jpg");
        assert_eq!(inspect(&p), SlotState::Absent);
        fs::write(&p, [0u8; 12]).unwrap();
        assert_eq!(inspect(&p), SlotState::Present { len: 12 });
    }
}
