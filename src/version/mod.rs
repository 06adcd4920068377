//! Version ordering for catalog version strings.
//!
//! Catalog versions are deliberately loose: a bare integer (`"15"`), a dotted
//! tuple (`"16.1"`), an optional `v` prefix (`"v1.0.0"`), and an optional
//! hyphenated pre-release suffix (`"1.2.3-beta"`) are all valid, so the
//! strict semver grammar does not apply. This module implements the ordering
//! used everywhere a "highest version" decision is made:
//!
//! - segments are compared left to right after stripping a leading `v`
//! - a shorter version is padded with `"0"` segments (`"2"` reads as `"2.0.0"`
//!   against a three-segment version)
//! - numeric segments compare as integers; anything non-numeric falls back to
//!   lexicographic comparison of the whole segment
//! - a release segment outranks the same segment with a pre-release suffix
//!   (`"1.2.3"` > `"1.2.3-beta"`)
//!
//! # Examples
//!
//! ```rust
//! use homestack::version::VersionComparator;
//! use std::cmp::Ordering;
//!
//! assert_eq!(VersionComparator::compare("1.2.3", "1.10.0"), Ordering::Less);
//! assert_eq!(VersionComparator::compare("v1.0.0", "1.0.0"), Ordering::Equal);
//!
//! let versions = ["15", "16.1", "16.1-rc1"];
//! assert_eq!(VersionComparator::latest(versions), Some("16.1"));
//! ```

use std::cmp::Ordering;

/// Sentinel version meaning "the highest version known for this service".
pub const LATEST: &str = "latest";

/// Whether a requested version is the "latest" sentinel.
///
/// An empty string is treated the same as the literal `"latest"`.
#[must_use]
pub fn is_latest(version: &str) -> bool {
    version.is_empty() || version == LATEST
}

/// Version comparison for loose, not-necessarily-semver version strings.
///
/// All methods are associated functions; the type carries no state.
pub struct VersionComparator;

impl VersionComparator {
    /// Compare two version strings segment by segment.
    ///
    /// A leading `v` on either side is ignored. The shorter version is padded
    /// with `"0"` segments, so `"2"` and `"2.0.0"` compare equal. The first
    /// segment pair that differs decides the result.
    #[must_use]
    pub fn compare(v1: &str, v2: &str) -> Ordering {
        let v1 = v1.strip_prefix('v').unwrap_or(v1);
        let v2 = v2.strip_prefix('v').unwrap_or(v2);

        let segments1: Vec<&str> = v1.split('.').collect();
        let segments2: Vec<&str> = v2.split('.').collect();

        let len = segments1.len().max(segments2.len());
        for i in 0..len {
            let s1 = segments1.get(i).copied().unwrap_or("0");
            let s2 = segments2.get(i).copied().unwrap_or("0");
            match Self::compare_segment(s1, s2) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }

        Ordering::Equal
    }

    /// Pick the highest version from an iterator of version strings.
    ///
    /// Returns `None` for an empty iterator. When two candidates compare
    /// equal (e.g. `"1.0"` and `"v1.0"`), the first one scanned is kept.
    #[must_use]
    pub fn latest<'a>(versions: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
        let mut best: Option<&str> = None;
        for candidate in versions {
            match best {
                None => best = Some(candidate),
                Some(current) => {
                    if Self::compare(candidate, current) == Ordering::Greater {
                        best = Some(candidate);
                    }
                }
            }
        }
        best
    }

    /// Compare a single segment pair.
    ///
    /// Each segment may carry a `-`-delimited pre-release suffix. When both
    /// numeric prefixes parse as integers they are compared numerically, with
    /// the suffix-free segment winning a tie (release > pre-release) and two
    /// suffixes comparing lexicographically. If either numeric prefix fails
    /// to parse, the whole segments are compared lexicographically.
    fn compare_segment(s1: &str, s2: &str) -> Ordering {
        let (num1, pre1) = Self::split_prerelease(s1);
        let (num2, pre2) = Self::split_prerelease(s2);

        match (num1.parse::<u64>(), num2.parse::<u64>()) {
            (Ok(n1), Ok(n2)) => match n1.cmp(&n2) {
                Ordering::Equal => match (pre1, pre2) {
                    (None, None) => Ordering::Equal,
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(p1), Some(p2)) => p1.cmp(p2),
                },
                decided => decided,
            },
            _ => s1.cmp(s2),
        }
    }

    /// Split a segment into its numeric prefix and optional pre-release suffix.
    fn split_prerelease(segment: &str) -> (&str, Option<&str>) {
        match segment.split_once('-') {
            Some((number, suffix)) => (number, Some(suffix)),
            None => (segment, None),
        }
    }
}
