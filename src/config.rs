use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::BumpType;
use crate::error::{BumpError, Result};
use crate::ui;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "bumpandroid.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".bumpandroid.toml";

/// Placeholder replaced by the new `versionName` in patterns.
const VERSION_PLACEHOLDER: &str = "{version}";

/// Represents the complete configuration for bump-android.
///
/// Contains the default bump strategy, the git workflow settings, build file
/// discovery settings and pipeline export settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Fallback bump strategy when neither the flag nor `bump_type` env is set
    #[serde(default)]
    pub bump_type: Option<String>,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub gradle: GradleConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_release_branch() -> String {
    "master".to_string()
}

fn default_source_branch() -> String {
    "develop".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_commit_message() -> String {
    "Bump version to {version}".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for the commit, tag, push and release merge sequence.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch the source branch is merged into after the bump
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    /// Branch the bump is committed on
    #[serde(default = "default_source_branch")]
    pub source_branch: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_true")]
    pub create_tag: bool,

    #[serde(default = "default_true")]
    pub merge_release: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
            release_branch: default_release_branch(),
            source_branch: default_source_branch(),
            tag_pattern: default_tag_pattern(),
            commit_message: default_commit_message(),
            create_tag: true,
            merge_release: true,
        }
    }
}

impl GitConfig {
    /// Tag name for `version`, e.g. `v1.2.4`
    pub fn tag_for(&self, version: &str) -> String {
        self.tag_pattern.replace(VERSION_PLACEHOLDER, version)
    }

    /// Commit message for `version`, e.g. `Bump version to 1.2.4`
    pub fn commit_message_for(&self, version: &str) -> String {
        self.commit_message.replace(VERSION_PLACEHOLDER, version)
    }
}

fn default_file_name() -> String {
    "build.gradle".to_string()
}

fn default_search_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Settings for locating the build file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GradleConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default = "default_search_dir")]
    pub search_dir: PathBuf,
}

impl Default for GradleConfig {
    fn default() -> Self {
        GradleConfig {
            file_name: default_file_name(),
            search_dir: default_search_dir(),
        }
    }
}

fn default_export_program() -> String {
    "envman".to_string()
}

fn default_code_key() -> String {
    crate::export::VERSION_CODE_KEY.to_string()
}

fn default_name_key() -> String {
    crate::export::VERSION_NAME_KEY.to_string()
}

/// Settings for publishing the new versions to later pipeline steps.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_export_program")]
    pub program: String,

    #[serde(default = "default_code_key")]
    pub code_key: String,

    #[serde(default = "default_name_key")]
    pub name_key: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            enabled: true,
            program: default_export_program(),
            code_key: default_code_key(),
            name_key: default_name_key(),
        }
    }
}

impl Config {
    /// Pick the bump strategy: explicit request first, then the config file.
    ///
    /// `requested` carries the `--bump-type` flag or the `bump_type`
    /// environment variable.
    pub fn resolve_bump_type(&self, requested: Option<&str>) -> Result<BumpType> {
        match self.requested_bump_type(requested) {
            Some(value) => value.parse(),
            None => Err(BumpError::input(
                "Invalid bump type! Set `bump_type` to one of major, minor, patch, none",
            )),
        }
    }

    /// The bump type as given, before validation
    pub fn requested_bump_type<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        requested.or(self.bump_type.as_deref())
    }

    /// Log the effective settings.
    ///
    /// The bump type is printed as given so an invalid value still shows up
    /// in the log before validation rejects it.
    pub fn print(&self, requested: Option<&str>) {
        ui::display_info("Configs:");
        ui::display_detail(&format!(
            "- BumpType: {}",
            self.requested_bump_type(requested).unwrap_or("")
        ));
        ui::display_detail(&format!("- BuildFile: {}", self.gradle.file_name));
        ui::display_detail(&format!(
            "- SearchDir: {}",
            self.gradle.search_dir.display()
        ));
        ui::display_detail(&format!("- Remote: {}", self.git.remote));
        ui::display_detail(&format!(
            "- Branches: {} -> {}{}",
            self.git.source_branch,
            self.git.release_branch,
            if self.git.merge_release {
                ""
            } else {
                " (merge disabled)"
            }
        ));
        if self.git.create_tag {
            ui::display_detail(&format!("- TagPattern: {}", self.git.tag_pattern));
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpandroid.toml` in current directory
/// 3. `.bumpandroid.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(path) = path else {
        log::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    log::debug!("loading config from {}", path.display());
    let config_str = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| BumpError::config(e.to_string()))
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
