use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("invalid semver '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("unsupported bump level '{0}'")]
    UnsupportedLevel(String),

    #[error("invalid prerelease format '{prerelease}': {reason}")]
    InvalidPrereleaseFormat { prerelease: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a version parsing error for the given input
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported level error
    pub fn unsupported_level(level: impl Into<String>) -> Self {
        BumpError::UnsupportedLevel(level.into())
    }

    /// Create a pre-release format error
    pub fn invalid_prerelease(prerelease: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::InvalidPrereleaseFormat {
            prerelease: prerelease.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }
}
