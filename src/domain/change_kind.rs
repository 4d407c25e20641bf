//! Classification of version bumps between two module versions

use semver::Version;
use std::fmt;

/// Size of a version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes), also pre-release and pseudo-version bumps
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl ChangeKind {
    /// Classify the change from `current` to `available`.
    ///
    /// Go versions carry a leading `v` which is stripped before parsing.
    pub fn between(current: &str, available: &str) -> Self {
        match (parse(current), parse(available)) {
            (Some(old), Some(new)) => {
                if old.major != new.major {
                    ChangeKind::Major
                } else if old.minor != new.minor {
                    ChangeKind::Minor
                } else {
                    ChangeKind::Patch
                }
            }
            _ => ChangeKind::Unknown,
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
            ChangeKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn parse(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    Version::parse(version).ok()
}
