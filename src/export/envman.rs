use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{BumpError, Result};
use crate::export::Exporter;

/// Exports variables through `envman add --key <KEY>`, feeding the value on stdin.
pub struct EnvmanExporter {
    program: String,
}

impl EnvmanExporter {
    pub fn new(program: impl Into<String>) -> Self {
        EnvmanExporter {
            program: program.into(),
        }
    }
}

impl Default for EnvmanExporter {
    fn default() -> Self {
        Self::new("envman")
    }
}

impl Exporter for EnvmanExporter {
    fn export(&self, key: &str, value: &str) -> Result<()> {
        log::debug!("{} add --key {}", self.program, key);

        let mut child = Command::new(&self.program)
            .args(["add", "--key", key])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BumpError::export(format!("Failed to run {} for {}: {}", self.program, key, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The exit status decides success when the child closed stdin early
            match stdin.write_all(value.as_bytes()) {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(BumpError::export(format!(
                "Failed to export environment ({}): {} exited with {}",
                key, self.program, status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_fails_with_key() {
        let exporter = EnvmanExporter::new("/nonexistent/envman");
        let err = exporter.export("BUMP_VERSION_CODE", "42").unwrap_err();
        assert!(err.to_string().contains("BUMP_VERSION_CODE"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_error() {
        let exporter = EnvmanExporter::new("false");
        let err = exporter.export("BUMP_VERSION_NAME", "1.0.0").unwrap_err();
        assert!(err.to_string().contains("BUMP_VERSION_NAME"));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_program() {
        // `true` ignores its arguments and stdin
        let exporter = EnvmanExporter::new("true");
        assert!(exporter.export("BUMP_VERSION_NAME", "1.0.0").is_ok());
    }
}
