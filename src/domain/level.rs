//! Bump levels accepted by the bump engine

use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// The kind of increment requested for a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
}

impl BumpLevel {
    /// All recognized levels, in the order they are documented
    pub const ALL: [BumpLevel; 7] = [
        BumpLevel::Major,
        BumpLevel::Minor,
        BumpLevel::Patch,
        BumpLevel::PreMajor,
        BumpLevel::PreMinor,
        BumpLevel::PrePatch,
        BumpLevel::PreRelease,
    ];

    /// Parse a bump level from its lowercase name
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Lowercase name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
            BumpLevel::PreMajor => "premajor",
            BumpLevel::PreMinor => "preminor",
            BumpLevel::PrePatch => "prepatch",
            BumpLevel::PreRelease => "prerelease",
        }
    }

    /// Whether the bumped version carries a pre-release label
    pub fn is_prerelease(&self) -> bool {
        !matches!(self, BumpLevel::Major | BumpLevel::Minor | BumpLevel::Patch)
    }
}

impl FromStr for BumpLevel {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        BumpLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| BumpError::unsupported_level(s))
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
