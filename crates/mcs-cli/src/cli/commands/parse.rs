//! `mcs parse <file_name>` – decode a partial content file name.

use anyhow::{anyhow, Result};
use mcs_core::resource::PartialContentName;

pub fn run_parse(file_name: &str) -> Result<()> {
    let name = PartialContentName::parse(file_name)
        .ok_or_else(|| anyhow!("not a partial content file name: {file_name}"))?;
    println!("offset={} sequence={}", name.offset, name.sequence);
    Ok(())
}
