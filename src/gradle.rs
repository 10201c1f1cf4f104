//! Reading and rewriting the version fields of a `build.gradle` file.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{VersionPair, MAX_VERSION_CODE};
use crate::error::{BumpError, Result};

static VERSION_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(versionName(?-u:\s)+)"([0-9.]+)""#).expect("hardcoded regex must compile")
});

static VERSION_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(versionCode(?-u:\s)+)([0-9]+)").expect("hardcoded regex must compile")
});

/// Number of matches per version field in a build file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOccurrences {
    pub version_code: usize,
    pub version_name: usize,
}

/// Extract `versionCode` and `versionName` from build file content.
///
/// The first occurrence of each field wins.
pub fn read_versions(content: &str) -> Result<VersionPair> {
    let name = VERSION_NAME_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(2))
        .ok_or_else(|| BumpError::field("Failed to match `versionName`"))?
        .as_str();

    let code_text = VERSION_CODE_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(2))
        .ok_or_else(|| BumpError::field("Failed to match `versionCode`"))?
        .as_str();

    let code = code_text
        .parse::<u32>()
        .ok()
        .filter(|code| *code <= MAX_VERSION_CODE)
        .ok_or_else(|| {
            BumpError::field(format!(
                "`versionCode` {} is not a valid 32-bit integer",
                code_text
            ))
        })?;

    Ok(VersionPair::new(code, name))
}

/// Substitute every `versionCode` and `versionName` occurrence with `pair`.
///
/// The whitespace between key and value and all surrounding text is kept.
pub fn write_versions(content: &str, pair: &VersionPair) -> String {
    let with_name = VERSION_NAME_PATTERN.replace_all(content, |caps: &regex::Captures| {
        format!("{}\"{}\"", &caps[1], pair.name)
    });

    VERSION_CODE_PATTERN
        .replace_all(&with_name, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], pair.code)
        })
        .into_owned()
}

/// Count how often each version field appears in the content.
pub fn count_occurrences(content: &str) -> FieldOccurrences {
    FieldOccurrences {
        version_code: VERSION_CODE_PATTERN.find_iter(content).count(),
        version_name: VERSION_NAME_PATTERN.find_iter(content).count(),
    }
}

pub fn read_versions_from_file(path: &Path) -> Result<VersionPair> {
    let content = fs::read_to_string(path)?;
    read_versions(&content)
}

/// Rewrite the version fields of the file at `path` in place.
pub fn write_versions_to_file(path: &Path, pair: &VersionPair) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let updated = write_versions(&content, pair);
    log::debug!("writing {} bytes to {}", updated.len(), path.display());
    fs::write(path, updated)?;
    Ok(())
}
