use std::fmt;

/// Non-fatal conditions noticed while bumping.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Bump type `none` leaves `versionName` as it is
    VersionNameUnchanged { version_name: String },
    /// A field appears several times in the build file; all are rewritten
    RepeatedField { field: String, occurrences: usize },
    /// The bump is committed on a branch other than the configured source branch
    UnexpectedBranch {
        expected: String,
        actual: Option<String>,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::VersionNameUnchanged { version_name } => {
                write!(
                    f,
                    "Bump type 'none' keeps versionName at {}, only versionCode changes",
                    version_name
                )
            }
            BoundaryWarning::RepeatedField { field, occurrences } => {
                write!(
                    f,
                    "`{}` appears {} times, every occurrence will be rewritten",
                    field, occurrences
                )
            }
            BoundaryWarning::UnexpectedBranch { expected, actual } => match actual {
                Some(actual) => write!(
                    f,
                    "Committing on '{}' but the release merge expects '{}'",
                    actual, expected
                ),
                None => write!(
                    f,
                    "HEAD is not on a branch, the release merge expects '{}'",
                    expected
                ),
            },
        }
    }
}
