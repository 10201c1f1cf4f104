use thiserror::Error;

/// Unified error type for bump-android operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Issue with input: {0}")]
    Input(String),

    #[error("File discovery failed: {0}")]
    Discovery(String),

    #[error("Version field error: {0}")]
    Field(String),

    #[error("Version parsing error: {0}")]
    VersionName(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Command `{command}` failed: {message}")]
    Command { command: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-android
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create an input validation error
    pub fn input(msg: impl Into<String>) -> Self {
        BumpError::Input(msg.into())
    }

    /// Create a build file discovery error
    pub fn discovery(msg: impl Into<String>) -> Self {
        BumpError::Discovery(msg.into())
    }

    /// Create an error for a missing or malformed version field
    pub fn field(msg: impl Into<String>) -> Self {
        BumpError::Field(msg.into())
    }

    /// Create an error for a `versionName` that is not `major.minor.patch`
    pub fn version_name(msg: impl Into<String>) -> Self {
        BumpError::VersionName(msg.into())
    }

    /// Create an export error with context
    pub fn export(msg: impl Into<String>) -> Self {
        BumpError::Export(msg.into())
    }

    /// Create an external command error
    pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
        BumpError::Command {
            command: command.into(),
            message: message.into(),
        }
    }
}
