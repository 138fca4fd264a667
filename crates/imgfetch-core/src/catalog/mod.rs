//! Product image catalog: which keys to process, in what order, and the
//! source URLs for each key.
//!
//! The catalog is loaded once at startup (built-in table or a TOML file) and
//! is read-only afterwards.

mod builtin;

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Longest key accepted; keeps `{key}-5.jpg` well under NAME_MAX.
const MAX_KEY_LEN: usize = 200;

/// Immutable mapping from item key to its ordered image URLs.
///
/// `items` is the processing order. A key listed in `items` without an entry
/// in `images` is reported as missing and skipped at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<String>,
    #[serde(default)]
    pub images: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// The compiled-in product table.
    pub fn builtin() -> Self {
        let items = builtin::ITEMS.iter().map(|k| k.to_string()).collect();
        let images = builtin::IMAGES
            .iter()
            .map(|(k, urls)| (k.to_string(), urls.iter().map(|u| u.to_string()).collect()))
            .collect();
        Catalog { items, images }
    }

    /// Parse and validate a TOML catalog.
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a TOML catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&data)?;
        tracing::debug!(
            path = %path.display(),
            items = catalog.items.len(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    /// Serialize in the same format `load` accepts.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// URLs for `key`, primary first. `None` when the key has no entry.
    pub fn urls(&self, key: &str) -> Option<&[String]> {
        self.images.get(key).map(Vec::as_slice)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Checks keys and URLs. Keys become file names, so anything that could
    /// escape the base directory is rejected.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for key in &self.items {
            validate_key(key)?;
            if !seen.insert(key.as_str()) {
                return Err(CatalogError::DuplicateKey(key.clone()));
            }
        }
        for (key, urls) in &self.images {
            validate_key(key)?;
            if urls.is_empty() {
                return Err(CatalogError::EmptyUrls(key.clone()));
            }
            for u in urls {
                validate_url(key, u)?;
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_key(key: &str) -> Result<(), CatalogError> {
    let reason = if key.is_empty() {
        Some("empty")
    } else if key.len() > MAX_KEY_LEN {
        Some("too long")
    } else if key.contains('/') || key.contains('\\') {
        Some("contains a path separator")
    } else if key.starts_with('.') {
        Some("starts with a dot")
    } else if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("contains whitespace or control characters")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(CatalogError::InvalidKey {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn validate_url(key: &str, raw: &str) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidUrl {
        key: key.to_string(),
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {}", other))),
    }
}
