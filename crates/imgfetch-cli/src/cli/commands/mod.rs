//! CLI command handlers, one file per subcommand.

mod catalog;
mod run;
mod status;

pub use catalog::run_catalog;
pub use run::run_fetch;
pub use status::run_status;
