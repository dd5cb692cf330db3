//! CLI for inspecting and staging the MCS cache layout.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mcs_core::config;
use mcs_core::resource::ResourceLayout;
use std::path::PathBuf;

use commands::{
    run_checkout, run_content, run_create_partial, run_dir, run_ls, run_parse, run_partial,
};

/// Top-level CLI for the MCS media cache layout.
#[derive(Debug, Parser)]
#[command(name = "mcs")]
#[command(about = "MCS: media cache resource layout tool", long_about = None)]
pub struct Cli {
    /// Cache root to use instead of the one from config.toml.
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the resource directory for a URL key.
    Dir {
        /// Normalized URL key.
        key: String,
    },

    /// Print the path of a named content file.
    Content {
        /// Normalized URL key (or resource name with --in-resource).
        key: String,
        /// Content file name, e.g. video.mp4.
        name: String,
        /// Treat KEY as an already-derived resource name.
        #[arg(long)]
        in_resource: bool,
    },

    /// Print the path of a partial content file.
    Partial {
        /// Normalized URL key.
        key: String,
        /// Byte offset where the fragment starts.
        #[arg(allow_negative_numbers = true)]
        offset: i64,
        /// Arrival sequence number.
        sequence: u64,
    },

    /// Decode a partial content file name into offset and sequence.
    Parse {
        /// File base name, e.g. 00000000000000001024_00000000000000000003.
        file_name: String,
    },

    /// Create the resource directory for a URL key if it does not exist.
    Checkout {
        /// Normalized URL key.
        key: String,
    },

    /// List partial content files of a resource, ordered by offset and sequence.
    Ls {
        /// Normalized URL key.
        key: String,
    },

    /// Create an empty partial content file with the next free sequence.
    CreatePartial {
        /// Normalized URL key.
        key: String,
        /// Byte offset where the fragment starts.
        #[arg(allow_negative_numbers = true)]
        offset: i64,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let layout = match cli.cache_root {
            Some(root) => ResourceLayout::new(root),
            None => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                cfg.layout()?
            }
        };
        tracing::debug!(cache_root = %layout.root().display(), "resolved cache root");

        match cli.command {
            CliCommand::Dir { key } => run_dir(&layout, &key)?,
            CliCommand::Content {
                key,
                name,
                in_resource,
            } => run_content(&layout, &key, &name, in_resource)?,
            CliCommand::Partial {
                key,
                offset,
                sequence,
            } => run_partial(&layout, &key, offset, sequence)?,
            CliCommand::Parse { file_name } => run_parse(&file_name)?,
            CliCommand::Checkout { key } => run_checkout(&layout, &key)?,
            CliCommand::Ls { key } => run_ls(&layout, &key)?,
            CliCommand::CreatePartial { key, offset } => {
                run_create_partial(&layout, &key, offset)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
