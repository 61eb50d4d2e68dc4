pub mod app_manifest;
pub mod boundary;
pub mod error;
pub mod package;
pub mod ui;
pub mod version;
pub mod workflow;

pub use error::{BumpError, Result};
