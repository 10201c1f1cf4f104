use crate::error::{BumpError, Result};
use crate::git::{GitCommand, Repository};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    calls: Mutex<Vec<GitCommand>>,
    tags: HashSet<String>,
    branch: Option<String>,
    fail_on: Option<&'static str>,
}

impl MockRepository {
    /// Create a new mock repository checked out on `develop`
    pub fn new() -> Self {
        MockRepository {
            calls: Mutex::new(Vec::new()),
            tags: HashSet::new(),
            branch: Some("develop".to_string()),
            fail_on: None,
        }
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Set the checked-out branch, `None` for a detached HEAD
    pub fn set_branch(&mut self, branch: Option<&str>) {
        self.branch = branch.map(|b| b.to_string());
    }

    /// Make the named subcommand (e.g. "push") fail
    pub fn fail_on(&mut self, subcommand: &'static str) {
        self.fail_on = Some(subcommand);
    }

    /// Operations recorded so far, in call order
    pub fn calls(&self) -> Vec<GitCommand> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<GitCommand>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, command: GitCommand) -> Result<()> {
        if self.fail_on == Some(command.name()) {
            return Err(BumpError::command(
                format!("git {}", command.name()),
                "exit status: 1",
            ));
        }
        self.lock().push(command);
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn diff(&self, path: &Path) -> Result<()> {
        self.record(GitCommand::Diff(path.to_path_buf()))
    }

    fn add(&self, path: &Path) -> Result<()> {
        self.record(GitCommand::Add(path.to_path_buf()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(GitCommand::Commit(message.to_string()))
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.record(GitCommand::Tag(name.to_string()))
    }

    fn push(&self, remote: &str, refspec: &str) -> Result<()> {
        self.record(GitCommand::Push {
            remote: remote.to_string(),
            refspec: refspec.to_string(),
        })
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.record(GitCommand::Checkout(branch.to_string()))
    }

    fn merge(&self, branch: &str) -> Result<()> {
        self.record(GitCommand::Merge(branch.to_string()))
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tags.contains(name))
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mock_repository_records_calls() {
        let repo = MockRepository::new();
        repo.add(Path::new("app/build.gradle")).unwrap();
        repo.commit("Bump version to 1.0.1").unwrap();

        assert_eq!(
            repo.calls(),
            vec![
                GitCommand::Add(PathBuf::from("app/build.gradle")),
                GitCommand::Commit("Bump version to 1.0.1".to_string()),
            ]
        );
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");

        assert!(repo.tag_exists("v1.0.0").unwrap());
        assert!(!repo.tag_exists("v2.0.0").unwrap());
    }

    #[test]
    fn test_mock_repository_failure_is_not_recorded() {
        let mut repo = MockRepository::new();
        repo.fail_on("push");

        let err = repo.push("origin", "HEAD").unwrap_err();
        assert!(err.to_string().contains("git push"));
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn test_mock_repository_default_branch() {
        let mut repo = MockRepository::default();
        assert_eq!(repo.current_branch().unwrap(), Some("develop".to_string()));
        repo.set_branch(None);
        assert_eq!(repo.current_branch().unwrap(), None);
    }
}
