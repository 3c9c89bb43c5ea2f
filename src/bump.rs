use crate::domain::{BumpLevel, Version};
use crate::error::Result;

/// Computes the next version string for a bump request.
///
/// The current version is parsed before the level is checked, so malformed
/// input is reported even when the level is unsupported too. A `v`/`V`
/// prefix on the input is kept on the output.
///
/// # Arguments
/// * `current_version` - Version to bump (e.g., "v1.2.3" or "1.2.3-alpha.1")
/// * `bump_level` - One of major, minor, patch, premajor, preminor, prepatch, prerelease
/// * `prerelease_tag` - Pre-release label, "alpha" when `None` or empty
///
/// # Example
/// ```
/// use semver_bump::bump::compute_bumped_version;
///
/// assert_eq!(compute_bumped_version("v1.2.3", "patch", None).unwrap(), "v1.2.4");
/// assert_eq!(compute_bumped_version("1.0.0", "premajor", None).unwrap(), "2.0.0-alpha.0");
/// assert_eq!(
///     compute_bumped_version("1.2.3-alpha.1", "prerelease", Some("alpha")).unwrap(),
///     "1.2.3-alpha.2"
/// );
/// ```
pub fn compute_bumped_version(
    current_version: &str,
    bump_level: &str,
    prerelease_tag: Option<&str>,
) -> Result<String> {
    let version = Version::parse(current_version)?;
    let level = BumpLevel::parse(bump_level)?;
    log::debug!(
        "bumping {} by {} (tag: {:?})",
        version,
        level,
        prerelease_tag
    );

    let bumped = version.bump(level, prerelease_tag)?;
    Ok(bumped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BumpError;

    #[test]
    fn test_invalid_version_reported_before_level() {
        assert!(matches!(
            compute_bumped_version("1.x.3", "bogus", None),
            Err(BumpError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_unsupported_level() {
        assert!(matches!(
            compute_bumped_version("1.2.3-alpha.1", "bogus", Some("alpha")),
            Err(BumpError::UnsupportedLevel(level)) if level == "bogus"
        ));
    }

    #[test]
    fn test_empty_tag_means_default() {
        assert_eq!(
            compute_bumped_version("1.2.3", "prerelease", Some("")).unwrap(),
            "1.2.3-alpha.0"
        );
    }
}
