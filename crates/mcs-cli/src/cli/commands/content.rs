//! `mcs content <key> <name>` – print a content file path.

use anyhow::Result;
use mcs_core::resource::ResourceLayout;

/// With `in_resource`, `key` is taken as a resource name and not hashed again.
pub fn run_content(
    layout: &ResourceLayout,
    key: &str,
    name: &str,
    in_resource: bool,
) -> Result<()> {
    let path = if in_resource {
        layout.content_file_path_in_resource(name, key)?
    } else {
        let dir = layout.resource_directory_path(key)?;
        layout.content_file_path(name, &dir)?
    };
    println!("{}", path.display());
    Ok(())
}
