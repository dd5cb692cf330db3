//! `mcs checkout <key>` – make sure the resource directory exists.

use anyhow::{Context, Result};
use mcs_core::resource::ResourceLayout;

pub fn run_checkout(layout: &ResourceLayout, key: &str) -> Result<()> {
    let dir = layout
        .checkout_resource_directory(key)
        .with_context(|| format!("checkout failed for key {key}"))?;
    println!("{}", dir.display());
    Ok(())
}
