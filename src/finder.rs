//! Locating the build file that carries `versionCode`.
//!
//! Discovery is delegated to `grep`. An unreadable directory below the search
//! root makes grep exit with status 2, which is reported as an error.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{BumpError, Result};

/// Field every candidate build file must mention.
const MARKER: &str = "versionCode";

/// Find files named `name_include` below `dir` that mention `versionCode`.
///
/// Returns the paths as printed by `grep`, in its output order.
pub fn find_build_files(dir: &Path, name_include: &str) -> Result<Vec<PathBuf>> {
    let mut cmd = Command::new("grep");
    cmd.args(["-l", "-r", MARKER, "--include", name_include])
        .arg(dir);

    let printable = format!(
        "grep -l -r {} --include {} {}",
        MARKER,
        name_include,
        dir.display()
    );
    log::debug!("running {}", printable);

    let output = cmd
        .output()
        .map_err(|e| BumpError::command(&printable, e.to_string()))?;

    // grep exits with 1 when nothing matched, which is not a failure here
    match output.status.code() {
        Some(0) | Some(1) => {}
        _ => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BumpError::command(
                printable,
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }
    }

    Ok(parse_grep_output(&String::from_utf8_lossy(&output.stdout)))
}

fn parse_grep_output(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Require exactly one discovered build file.
pub fn locate_single(mut files: Vec<PathBuf>, name_include: &str) -> Result<PathBuf> {
    match files.len() {
        0 => Err(BumpError::discovery(format!(
            "No `{}` file found",
            name_include
        ))),
        1 => Ok(files.remove(0)),
        _ => {
            let listing: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
            Err(BumpError::discovery(format!(
                "Found more than one `{}` file: {}",
                name_include,
                listing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_grep_output_skips_blank_lines() {
        let files = parse_grep_output("./app/build.gradle\n\n  \n");
        assert_eq!(files, vec![PathBuf::from("./app/build.gradle")]);
    }

    #[test]
    fn test_locate_single_none() {
        let err = locate_single(Vec::new(), "build.gradle").unwrap_err();
        assert_eq!(
            err.to_string(),
            "File discovery failed: No `build.gradle` file found"
        );
    }

    #[test]
    fn test_locate_single_one() {
        let path = PathBuf::from("app/build.gradle");
        assert_eq!(
            locate_single(vec![path.clone()], "build.gradle").unwrap(),
            path
        );
    }

    #[test]
    fn test_locate_single_many() {
        let files = vec![
            PathBuf::from("app/build.gradle"),
            PathBuf::from("lib/build.gradle"),
        ];
        let err = locate_single(files, "build.gradle").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Found more than one `build.gradle` file"));
        assert!(msg.contains("lib/build.gradle"));
    }

    #[test]
    fn test_find_build_files_only_matches_marked_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("app")).unwrap();
        fs::write(
            dir.path().join("app/build.gradle"),
            "versionCode 1\nversionName \"1.0.0\"\n",
        )
        .unwrap();
        // Root project build file without version fields
        fs::write(dir.path().join("build.gradle"), "buildscript {}\n").unwrap();
        fs::write(dir.path().join("app/notes.txt"), "versionCode 9\n").unwrap();

        let files = find_build_files(dir.path(), "build.gradle").unwrap();
        assert_eq!(files, vec![dir.path().join("app/build.gradle")]);
    }

    #[test]
    fn test_find_build_files_no_match_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("build.gradle"), "buildscript {}\n").unwrap();

        let files = find_build_files(dir.path(), "build.gradle").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_find_build_files_missing_dir_is_error() {
        let result = find_build_files(Path::new("/nonexistent/project"), "build.gradle");
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_build_files_unreadable_dir_is_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("app/build.gradle"), "versionCode 1
").unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        let readable = fs::read_dir(&locked).is_ok();
        let result = find_build_files(dir.path(), "build.gradle");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        let err = result.unwrap_err();
        assert!(matches!(err, BumpError::Command { .. }));
        assert!(err.to_string().contains("exit status: 2"));
    }
}
