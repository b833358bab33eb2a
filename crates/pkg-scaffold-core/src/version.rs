//! Version parsing: API keys for externals and tool version detection.
//!
//! Provides lightweight version handling without adding a semver dependency.
//! Version *ranges* as found in `package.json` (`^0.1.12`, `~2.0`, `>=6`) are
//! reduced to their lower bound, which is all the API key derivation needs.

use std::fmt;
use std::process::Command;

/// A semver-like version with major.minor.patch components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Parse the first `X.Y.Z` pattern found in a string.
    ///
    /// Handles common formats:
    /// - `"2.1.8"`
    /// - `"v20.11.1"`
    /// - `"0.2.0-wip"`
    /// - `"yarn@1.22.19"`
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_digit() {
                if let Some((ver, _)) = Self::parse_at(s, i) {
                    return Some(ver);
                }
            }
            i += 1;
        }
        None
    }

    /// Parse the lower bound of a version range.
    ///
    /// Accepts the leading operators `^ ~ = > <` and `v`, and partial versions where
    /// missing or wildcard (`x`, `*`) components count as zero. Returns `None` for
    /// tags such as `latest` or a bare `*`.
    pub fn parse_range(range: &str) -> Option<Self> {
        let trimmed = range
            .trim()
            .trim_start_matches(['^', '~', '=', '>', '<', 'v', ' ']);
        let lower = trimmed.split_whitespace().next()?;
        if let Some(v) = Self::parse(lower) {
            return Some(v);
        }

        let mut parts = lower.split('.');
        let major = parts.next()?.parse().ok()?;
        let mut component = || -> Option<u32> {
            match parts.next() {
                None | Some("x") | Some("X") | Some("*") => Some(0),
                Some(digits) => digits.parse().ok(),
            }
        };
        let minor = component()?;
        let patch = component()?;
        Some(Self {
            major,
            minor,
            patch,
        })
    }

    /// Short compatibility key: the major number, or `0<minor>` for `0.x` releases.
    ///
    /// `2.0.4` gives `"2"`, `0.1.12` gives `"01"`.
    pub fn api_key(&self) -> String {
        if self.major == 0 {
            format!("0{}", self.minor)
        } else {
            self.major.to_string()
        }
    }

    /// Try to parse `X.Y.Z` starting at byte offset `start`.
    /// Returns the version and the byte offset after the last digit.
    fn parse_at(s: &str, start: usize) -> Option<(Self, usize)> {
        let rest = &s[start..];
        let mut parts = rest.splitn(4, '.');
        let major_str = parts.next()?;
        let minor_str = parts.next()?;
        let patch_part = parts.next()?;

        let major: u32 = major_str.parse().ok()?;
        let minor: u32 = minor_str.parse().ok()?;
        // patch_part may have trailing non-digit chars (e.g., "0-wip")
        let patch_str: String = patch_part
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if patch_str.is_empty() {
            return None;
        }
        let patch: u32 = patch_str.parse().ok()?;

        Some((
            Self {
                major,
                minor,
                patch,
            },
            start + major_str.len() + 1 + minor_str.len() + 1 + patch_str.len(),
        ))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Derive the API key of a version range, see [`Version::api_key`].
pub fn api_key(range: &str) -> Option<String> {
    Version::parse_range(range).map(|v| v.api_key())
}

/// Run `tool --version` and parse the output.
///
/// Returns `None` if the tool is not found, exits with error, or
/// produces output that doesn't contain an `X.Y.Z` pattern.
pub fn detect_version(tool: &str) -> Option<Version> {
    let output = Command::new(tool).arg("--version").output().ok()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Version::parse(&stderr);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if let Some(v) = Version::parse(&stdout) {
        return Some(v);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Version::parse(&stderr)
}
