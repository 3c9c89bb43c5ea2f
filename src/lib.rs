pub mod bump;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod ui;

pub use bump::compute_bumped_version;
pub use domain::{BumpLevel, Version};
pub use error::{BumpError, Result};
