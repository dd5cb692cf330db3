//! `mcs partial <key> <offset> <sequence>` – print a partial content file path.

use anyhow::Result;
use mcs_core::resource::ResourceLayout;

pub fn run_partial(layout: &ResourceLayout, key: &str, offset: i64, sequence: u64) -> Result<()> {
    let path = layout.partial_content_path(key, offset, sequence)?;
    println!("{}", path.display());
    Ok(())
}
