//! `mcs create-partial <key> <offset>` – create an empty partial content file.

use anyhow::{Context, Result};
use mcs_core::resource::ResourceLayout;

pub fn run_create_partial(layout: &ResourceLayout, key: &str, offset: i64) -> Result<()> {
    let resource_name = layout.resource_name(key)?;
    let created = layout
        .create_partial_content_file(&resource_name, offset)
        .with_context(|| format!("could not create partial content for key {key}"))?;
    println!("{}", created.path.display());
    Ok(())
}
