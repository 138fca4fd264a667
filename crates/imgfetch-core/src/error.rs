//! Error types for fetching and catalog loading.

use std::path::PathBuf;

/// Failure of a single image fetch. Never fatal for the run; the fetcher
/// counts it and moves on to the next slot.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("{0}")]
    Transport(#[from] curl::Error),

    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// Body arrived but could not be written to the target path.
    #[error("write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse failure class, reported alongside each failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Network,
    Http(u32),
    Filesystem,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Transport(e) => classify_curl_error(e),
            FetchError::Http(code) => FailureKind::Http(*code),
            FetchError::Io { .. } => FailureKind::Filesystem,
        }
    }
}

/// Timeouts are split out from other transport errors so the log shows them plainly.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    FailureKind::Network
}

/// Rejected catalog content. Raised at load time, before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("catalog key listed twice: {0}")]
    DuplicateKey(String),

    #[error("no URLs for catalog key {0}")]
    EmptyUrls(String),

    #[error("invalid URL for {key}: {url} ({reason})")]
    InvalidUrl {
        key: String,
        url: String,
        reason: String,
    },

    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
