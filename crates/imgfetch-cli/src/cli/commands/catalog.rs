//! `imgfetch catalog` – print the effective catalog.

use anyhow::Result;
use imgfetch_core::Catalog;

pub fn run_catalog(catalog: &Catalog) -> Result<()> {
    print!("{}", catalog.to_toml()?);
    Ok(())
}
