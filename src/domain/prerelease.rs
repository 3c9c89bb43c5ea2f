//! Pre-release label handling
//!
//! Labels produced here always have the shape `<tag>.<iteration>`, e.g. `beta.3`.
//! See https://semver.org/#spec-item-9 for the identifier grammar.

use crate::error::{BumpError, Result};

/// Tag used when none is supplied
pub const DEFAULT_TAG: &str = "alpha";

/// Resolve the effective tag, treating a missing or empty tag as the default
pub fn effective_tag(tag: Option<&str>) -> &str {
    match tag {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_TAG,
    }
}

/// Build a fresh `<tag>.0` label
pub fn fresh(tag: &str) -> Result<String> {
    labelled(tag, 0)
}

/// Compute the label following `current` for the given tag.
///
/// A current label that starts with `tag` and has a numeric part after its
/// first `.` is incremented. Labels that start with `tag` but carry a
/// malformed or negative number are rejected. Everything else restarts at
/// `<tag>.0`.
///
/// Matching is by prefix, so tag `a` also continues `alpha.3` (as `a.4`).
pub fn next(current: Option<&str>, tag: &str) -> Result<String> {
    let Some(current) = current else {
        return fresh(tag);
    };

    if current.starts_with(tag) {
        if let Some((_, number)) = current.split_once('.') {
            if number.starts_with('-') {
                return Err(BumpError::invalid_prerelease(
                    current,
                    "negative number in prerelease is not valid",
                ));
            }
            let iteration = number.parse::<u64>().map_err(|e| {
                BumpError::invalid_prerelease(current, format!("'{}': {}", number, e))
            })?;
            let iteration = iteration.checked_add(1).ok_or_else(|| {
                BumpError::invalid_prerelease(current, "iteration number overflows")
            })?;
            log::trace!("continuing prerelease '{}' as {}.{}", current, tag, iteration);
            return labelled(tag, iteration);
        }
    }

    log::trace!("prerelease '{}' does not continue tag '{}'", current, tag);
    fresh(tag)
}

fn labelled(tag: &str, iteration: u64) -> Result<String> {
    let label = format!("{}.{}", tag, iteration);
    semver::Prerelease::new(&label)
        .map_err(|e| BumpError::invalid_prerelease(&label, e.to_string()))?;
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_tag() {
        assert_eq!(effective_tag(None), "alpha");
        assert_eq!(effective_tag(Some("")), "alpha");
        assert_eq!(effective_tag(Some("rc")), "rc");
    }

    #[test]
    fn test_fresh_label() {
        assert_eq!(fresh("beta").unwrap(), "beta.0");
        assert_eq!(fresh("xyz123").unwrap(), "xyz123.0");
    }

    #[test]
    fn test_fresh_rejects_unusable_tag() {
        assert!(matches!(
            fresh("not valid"),
            Err(BumpError::InvalidPrereleaseFormat { .. })
        ));
    }

    #[test]
    fn test_next_without_current() {
        assert_eq!(next(None, "alpha").unwrap(), "alpha.0");
    }

    #[test]
    fn test_next_increments_matching_tag() {
        assert_eq!(next(Some("alpha.1"), "alpha").unwrap(), "alpha.2");
        assert_eq!(next(Some("rc.99"), "rc").unwrap(), "rc.100");
    }

    #[test]
    fn test_next_restarts_on_other_tag() {
        assert_eq!(next(Some("beta.1"), "rc").unwrap(), "rc.0");
    }

    #[test]
    fn test_next_restarts_without_separator() {
        assert_eq!(next(Some("alpha"), "alpha").unwrap(), "alpha.0");
    }

    #[test]
    fn test_next_prefix_match() {
        assert_eq!(next(Some("alpha.3"), "a").unwrap(), "a.4");
    }

    #[test]
    fn test_next_rejects_negative() {
        assert!(matches!(
            next(Some("alpha.-1"), "alpha"),
            Err(BumpError::InvalidPrereleaseFormat { .. })
        ));
    }

    #[test]
    fn test_next_rejects_non_numeric() {
        assert!(matches!(
            next(Some("alpha.x"), "alpha"),
            Err(BumpError::InvalidPrereleaseFormat { .. })
        ));
        assert!(matches!(
            next(Some("alpha.1.2"), "alpha"),
            Err(BumpError::InvalidPrereleaseFormat { .. })
        ));
    }
}
