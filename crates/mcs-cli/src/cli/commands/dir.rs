//! `mcs dir <key>` – print the resource directory for a key.

use anyhow::Result;
use mcs_core::resource::ResourceLayout;

pub fn run_dir(layout: &ResourceLayout, key: &str) -> Result<()> {
    let dir = layout.resource_directory_path(key)?;
    println!("{}", dir.display());
    Ok(())
}
