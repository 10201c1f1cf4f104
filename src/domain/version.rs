use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Largest `versionCode` Android accepts (a signed 32-bit integer).
pub const MAX_VERSION_CODE: u32 = i32::MAX as u32;

/// Requested bump strategy for `versionName`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpType {
    Major,
    Minor,
    Patch,
    None,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
            BumpType::None => "none",
        }
    }
}

impl FromStr for BumpType {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(BumpType::Major),
            "minor" => Ok(BumpType::Minor),
            "patch" => Ok(BumpType::Patch),
            "none" => Ok(BumpType::None),
            _ => Err(BumpError::input(format!(
                "Invalid bump type! '{}' is not one of major, minor, patch, none",
                s
            ))),
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two version fields of an Android build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPair {
    /// `versionCode`, the monotonically increasing build number
    pub code: u32,
    /// `versionName`, a dotted numeric version such as `1.4.2`
    pub name: String,
}

impl VersionPair {
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        VersionPair {
            code,
            name: name.into(),
        }
    }

    /// Compute the next version pair.
    ///
    /// `versionCode` always increases by one. `versionName` is read as
    /// `major.minor.patch` and bumped according to `bump_type`, resetting the
    /// lower components to zero. Leading zeros are accepted and dropped from
    /// the bumped name.
    pub fn bump(&self, bump_type: BumpType) -> Result<Self> {
        let code = self
            .code
            .checked_add(1)
            .filter(|code| *code <= MAX_VERSION_CODE)
            .ok_or_else(|| {
                BumpError::field(format!(
                    "versionCode {} cannot be incremented past {}",
                    self.code, MAX_VERSION_CODE
                ))
            })?;

        let name = bump_name(&self.name, bump_type)?;

        Ok(VersionPair { code, name })
    }
}

/// Parse a dotted `major.minor.patch` name.
///
/// Unlike strict semver, components such as `05` are allowed, since
/// `versionName "2024.05.1"` is common in Android projects.
fn parse_name(name: &str) -> Result<semver::Version> {
    let invalid = || {
        BumpError::version_name(format!(
            "`versionName` {} is not of the form major.minor.patch",
            name
        ))
    };

    let parts = name
        .split('.')
        .map(|part| part.parse::<u64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;

    match parts.as_slice() {
        [major, minor, patch] => Ok(semver::Version::new(*major, *minor, *patch)),
        _ => Err(invalid()),
    }
}

fn bump_name(name: &str, bump_type: BumpType) -> Result<String> {
    let current = parse_name(name)?;

    let increment = |component: u64| {
        component.checked_add(1).ok_or_else(|| {
            BumpError::version_name(format!("`versionName` {} cannot be bumped", name))
        })
    };

    let next = match bump_type {
        BumpType::Major => semver::Version::new(increment(current.major)?, 0, 0),
        BumpType::Minor => semver::Version::new(current.major, increment(current.minor)?, 0),
        BumpType::Patch => {
            semver::Version::new(current.major, current.minor, increment(current.patch)?)
        }
        BumpType::None => return Ok(name.to_string()),
    };

    Ok(next.to_string())
}
