//! Working-directory layout: one folder per Minecraft version, each holding
//! a dated CommandAPI release jar plus whatever dump files earlier runs left
//! behind.

use std::{fmt, fs, io, path::Path, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

// Dated release jar as produced by the CommandAPI build, e.g.
// CommandAPI-9.0.3-SNAPSHOT_14_Jun_2023_(10-30-45am).jar
const RELEASE_JAR_PATTERN: &str =
    r"^CommandAPI-(\d+)\.(\d+)\.(\d+)(-SNAPSHOT)?_(\d{1,2})_(\w{3})_(\d{4})_\((\d{2}-\d{2}-\d{2}(am|pm|AM|PM))\)\.jar$";

fn release_jar_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RELEASE_JAR_PATTERN).expect("release jar pattern compiles"))
}

#[derive(Debug, Error)]
#[error("not a version folder name: {0}")]
pub struct VersionParseError(String);

/// A Minecraft version, parsed from a folder named `X.Y.Z`. Ordered
/// numerically, so `1.20.6` sorts after `1.9.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionParseError(s.to_string());
        let mut parts = s.split('.');
        let major = parts.next().and_then(parse_component).ok_or_else(err)?;
        let minor = parts.next().and_then(parse_component).ok_or_else(err)?;
        let patch = parts.next().and_then(parse_component).ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Version {
            major,
            minor,
            patch,
        })
    }
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Version folders directly inside `root`, sorted ascending.
pub fn collect_version_dirs(root: &Path) -> io::Result<Vec<Version>> {
    let mut versions = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if let Ok(version) = name.parse::<Version>() {
            versions.push(version);
        }
    }
    versions.sort();
    Ok(versions)
}

pub fn is_release_jar(name: &str) -> bool {
    release_jar_regex().is_match(name)
}

/// The CommandAPI release jar inside a version folder, if one is there.
/// Picks the lexicographically first match when several jars qualify.
pub fn find_release_jar(dir: &Path) -> io::Result<Option<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_release_jar(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names.into_iter().next())
}

/// Remove `bytecode_*.txt` dumps left over from earlier runs so stale files
/// never get mistaken for fresh output.
pub fn clean_dump_files(dir: &Path) -> io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with("bytecode_") && name.ends_with(".txt") {
            debug!("removing stale dump {}", name);
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}
