//! Domain logic - version parsing and bump rules, free of any I/O

pub mod level;
pub mod prerelease;
pub mod version;

pub use level::BumpLevel;
pub use version::Version;
