pub mod catalog;
pub mod checksum;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod logging;
pub mod pacer;
pub mod report;
pub mod slot;
pub mod storage;

pub use catalog::Catalog;
pub use error::{CatalogError, FailureKind, FetchError};
pub use fetcher::{FetchEvent, FetchOptions, Fetcher, RunSummary, Tally};
