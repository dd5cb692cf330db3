//! CLI command handlers. Each command is in its own file.

mod checkout;
mod content;
mod create_partial;
mod dir;
mod ls;
mod parse;
mod partial;

pub use checkout::run_checkout;
pub use content::run_content;
pub use create_partial::run_create_partial;
pub use dir::run_dir;
pub use ls::run_ls;
pub use parse::run_parse;
pub use partial::run_partial;
