use crate::domain::level::BumpLevel;
use crate::domain::prerelease;
use crate::error::{BumpError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<prefix>[vV])?(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?:-(?P<pre>[^+]*))?(?:\+(?P<build>.*))?$",
    )
    .expect("version pattern is a valid regex")
});

/// Semantic version with optional pre-release, build metadata and `v` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub build: Option<String>,
    /// `v` or `V` as found in the parsed text, restored on display
    pub prefix: Option<char>,
}

impl Version {
    /// Create a new release version without prefix, pre-release or build
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
            prefix: None,
        }
    }

    /// Parse a version string (e.g., "v1.2.3-beta.1+sha.5114f85")
    ///
    /// Leading zeros in the numeric components are accepted and dropped, so
    /// "1.05.0" reads as 1.5.0. Leading zeros in numeric pre-release
    /// identifiers are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = VERSION_RE
            .captures(text)
            .ok_or_else(|| BumpError::invalid_version(text, diagnose(text)))?;

        let number = |name: &str| -> Result<u64> {
            caps[name].parse::<u64>().map_err(|e| {
                BumpError::invalid_version(text, format!("{} component: {}", name, e))
            })
        };
        let major = number("major")?;
        let minor = number("minor")?;
        let patch = number("patch")?;

        let prerelease = match caps.name("pre").map(|m| m.as_str()) {
            None => None,
            Some("") => {
                return Err(BumpError::invalid_version(text, "empty prerelease section"));
            }
            Some(pre) => {
                semver::Prerelease::new(pre)
                    .map_err(|e| BumpError::invalid_version(text, e.to_string()))?;
                Some(pre.to_string())
            }
        };

        let build = match caps.name("build").map(|m| m.as_str()) {
            None => None,
            Some("") => {
                return Err(BumpError::invalid_version(text, "empty build metadata section"));
            }
            Some(build) => {
                semver::BuildMetadata::new(build)
                    .map_err(|e| BumpError::invalid_version(text, e.to_string()))?;
                Some(build.to_string())
            }
        };

        let prefix = caps
            .name("prefix")
            .and_then(|m| m.as_str().chars().next());

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
            prefix,
        })
    }

    /// Whether the parsed text started with `v` or `V`
    pub fn has_v_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// Whether this version carries a pre-release label
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Bump version according to the requested level.
    ///
    /// `tag` names the pre-release label for the pre-release levels and
    /// defaults to "alpha" when missing or empty.
    pub fn bump(&self, level: BumpLevel, tag: Option<&str>) -> Result<Self> {
        let tag = prerelease::effective_tag(tag);

        let released = match level {
            BumpLevel::Major | BumpLevel::PreMajor => {
                self.released(self.increment(self.major, "major")?, 0, 0)
            }
            BumpLevel::Minor | BumpLevel::PreMinor => {
                self.released(self.major, self.increment(self.minor, "minor")?, 0)
            }
            BumpLevel::Patch | BumpLevel::PrePatch => {
                self.released(self.major, self.minor, self.increment(self.patch, "patch")?)
            }
            BumpLevel::PreRelease => {
                let label = prerelease::next(self.prerelease.as_deref(), tag)?;
                return Ok(Version {
                    prerelease: Some(label),
                    ..self.clone()
                });
            }
        };

        if level.is_prerelease() {
            Ok(Version {
                prerelease: Some(prerelease::fresh(tag)?),
                ..released
            })
        } else {
            Ok(released)
        }
    }

    fn released(&self, major: u64, minor: u64, patch: u64) -> Self {
        Version {
            prefix: self.prefix,
            ..Version::new(major, minor, patch)
        }
    }

    fn increment(&self, component: u64, name: &str) -> Result<u64> {
        component.checked_add(1).ok_or_else(|| {
            BumpError::invalid_version(self.to_string(), format!("{} component overflows", name))
        })
    }
}

/// Explain why `text` does not match the version grammar
fn diagnose(text: &str) -> String {
    let clean = text
        .strip_prefix('v')
        .or_else(|| text.strip_prefix('V'))
        .unwrap_or(text);
    if clean.is_empty() {
        return "empty version string".to_string();
    }

    let core = clean
        .split(['-', '+'])
        .next()
        .unwrap_or_default();
    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return format!(
            "expected MAJOR.MINOR.PATCH, found {} component(s) in '{}'",
            parts.len(),
            core
        );
    }

    for (name, part) in ["major", "minor", "patch"].iter().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return format!("{} component '{}' is not a number", name, part);
        }
    }

    "unexpected characters after MAJOR.MINOR.PATCH".to_string()
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
