//! Domain value objects: `PackageName` and `TargetName`.
//!
//! Both are validated at construction and immutable afterwards. Holding one
//! means the invariant has already been checked.

use crate::domain::error::DomainError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

// ── PackageName ──────────────────────────────────────────────────────────────

/// A reverse-domain package identifier such as `myapp.dev`.
///
/// Invariant: two or more dot-separated segments, each starting with an ASCII
/// letter, `_` or `$`, followed by ASCII letters, digits, `_` or `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if is_valid_package(&raw) {
            Ok(Self(raw))
        } else {
            Err(DomainError::InvalidPackageName { package: raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dot-separated segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl FromStr for PackageName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reverse-domain form: at least two identifier segments joined by dots.
fn package_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*\.)+[A-Za-z_$][A-Za-z0-9_$]*$")
            .expect("Invalid package name regex")
    })
}

fn is_valid_package(raw: &str) -> bool {
    package_pattern().is_match(raw)
}

// ── TargetName ───────────────────────────────────────────────────────────────

/// The application name, as typed by the user (case preserved).
///
/// The name ends up in file names (`<name>.desktop`, `<name>.png`), so it
/// must be non-empty and free of path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetName(String);

impl TargetName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let reason = if raw.trim().is_empty() {
            Some("name cannot be empty")
        } else if raw.contains('/') || raw.contains('\\') {
            Some("name cannot contain path separators")
        } else if raw == "." || raw == ".." {
            Some("name cannot be a relative directory marker")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidTargetName {
                name: raw,
                reason: reason.into(),
            }),
            None => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reverse_domain_names() {
        for name in [
            "myapp.dev",
            "com.example.app",
            "_private.$dollar",
            "a.b",
            "App1.Dev_2",
            "x.y.z.w",
        ] {
            assert!(PackageName::parse(name).is_ok(), "should accept {name}");
        }
    }

    #[test]
    fn rejects_single_segment() {
        assert_eq!(
            PackageName::parse("BadName"),
            Err(DomainError::InvalidPackageName {
                package: "BadName".into()
            })
        );
    }

    #[test]
    fn rejects_segment_starting_with_digit() {
        assert!(PackageName::parse("myapp.1dev").is_err());
        assert!(PackageName::parse("1myapp.dev").is_err());
    }

    #[test]
    fn rejects_empty_segments_and_bad_characters() {
        for name in ["", ".", "myapp.", ".dev", "my..app", "my-app.dev", "my app.dev", "é.dev"] {
            assert!(PackageName::parse(name).is_err(), "should reject {name:?}");
        }
    }

    #[test]
    fn pattern_is_anchored_at_both_ends() {
        for name in ["myapp.dev\n", " myapp.dev", "myapp.dev.", "myapp.dev/x"] {
            assert!(PackageName::parse(name).is_err(), "should reject {name:?}");
        }
    }

    #[test]
    fn segments_are_in_order() {
        let pkg: PackageName = "com.example.app".parse().unwrap();
        assert_eq!(pkg.segments().collect::<Vec<_>>(), ["com", "example", "app"]);
    }

    #[test]
    fn target_name_keeps_case() {
        let name = TargetName::parse("MyApp").unwrap();
        assert_eq!(name.as_str(), "MyApp");
        assert_eq!(name.to_lowercase(), "myapp");
    }

    #[test]
    fn target_name_rejects_separators_and_empty() {
        assert!(TargetName::parse("").is_err());
        assert!(TargetName::parse("   ").is_err());
        assert!(TargetName::parse("a/b").is_err());
        assert!(TargetName::parse("a\\b").is_err());
        assert!(TargetName::parse("..").is_err());
    }
}
