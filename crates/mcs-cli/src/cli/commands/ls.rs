//! `mcs ls <key>` – list partial content files of a resource.

use anyhow::Result;
use mcs_core::resource::{list_partial_contents, ResourceLayout};

pub fn run_ls(layout: &ResourceLayout, key: &str) -> Result<()> {
    let dir = layout.resource_directory_path(key)?;
    let entries = list_partial_contents(&dir)?;
    if entries.is_empty() {
        println!("No partial content in {}.", dir.display());
    } else {
        println!("{:<20} {:<20} {}", "OFFSET", "SEQUENCE", "PATH");
        for e in entries {
            println!(
                "{:<20} {:<20} {}",
                e.name.offset,
                e.name.sequence,
                e.path.display()
            );
        }
    }
    Ok(())
}
