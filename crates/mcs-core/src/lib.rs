//! On-disk layout of the MCS media cache: resource directories, content and
//! partial content file names, and directory checkout.

pub mod config;
pub mod logging;

pub mod checkout;
pub mod error;
pub mod resource;

pub use checkout::checkout_directory;
pub use error::ResourceError;
pub use resource::{PartialContentName, ResourceLayout};
