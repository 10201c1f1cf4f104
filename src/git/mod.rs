//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! steps of a bump, allowing the workflow to run against a real repository
//! or against a recording mock in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::CliRepository]: drives the `git` binary, using `git2` for lookups
//! - [mock::MockRepository]: records every operation for testing
//!
//! # Usage
//!
//! ```rust
//! # use bump_android::git::Repository;
//! # use std::path::Path;
//! # fn example<R: Repository>(repo: &R) -> bump_android::Result<()> {
//! let file = Path::new("app/build.gradle");
//! repo.add(file)?;
//! repo.commit("Bump version to 1.2.4")?;
//! repo.push("origin", "HEAD")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::CliRepository;

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// One step of the version-control sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    Diff(PathBuf),
    Add(PathBuf),
    Commit(String),
    Tag(String),
    Push { remote: String, refspec: String },
    Checkout(String),
    Merge(String),
}

impl GitCommand {
    /// Subcommand name as passed to `git`
    pub fn name(&self) -> &'static str {
        match self {
            GitCommand::Diff(_) => "diff",
            GitCommand::Add(_) => "add",
            GitCommand::Commit(_) => "commit",
            GitCommand::Tag(_) => "tag",
            GitCommand::Push { .. } => "push",
            GitCommand::Checkout(_) => "checkout",
            GitCommand::Merge(_) => "merge",
        }
    }

    /// Run this step against `repo`
    pub fn apply<R: Repository + ?Sized>(&self, repo: &R) -> Result<()> {
        match self {
            GitCommand::Diff(path) => repo.diff(path),
            GitCommand::Add(path) => repo.add(path),
            GitCommand::Commit(message) => repo.commit(message),
            GitCommand::Tag(name) => repo.tag(name),
            GitCommand::Push { remote, refspec } => repo.push(remote, refspec),
            GitCommand::Checkout(branch) => repo.checkout(branch),
            GitCommand::Merge(branch) => repo.merge(branch),
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitCommand::Diff(path) | GitCommand::Add(path) => {
                write!(f, "git {} {}", self.name(), path.display())
            }
            GitCommand::Commit(message) => write!(f, "git commit -m \"{}\"", message),
            GitCommand::Push { remote, refspec } => write!(f, "git push {} {}", remote, refspec),
            GitCommand::Tag(arg) | GitCommand::Checkout(arg) | GitCommand::Merge(arg) => {
                write!(f, "git {} {}", self.name(), arg)
            }
        }
    }
}

/// Version-control operations needed to publish a bump
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
///
/// ## Error Handling
///
/// A failing operation returns [crate::error::BumpError::Command] (or
/// [crate::error::BumpError::Git] for lookups) and the caller aborts the run.
pub trait Repository: Send + Sync {
    /// Show the working tree changes of `path`
    fn diff(&self, path: &Path) -> Result<()>;

    /// Stage `path`
    fn add(&self, path: &Path) -> Result<()>;

    /// Commit the staged changes with `message`
    fn commit(&self, message: &str) -> Result<()>;

    /// Create a lightweight tag named `name` on HEAD
    fn tag(&self, name: &str) -> Result<()>;

    /// Push `refspec` to `remote`
    ///
    /// # Example
    /// ```rust
    /// # use bump_android::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> bump_android::Result<()> {
    /// repo.push("origin", "HEAD")?;
    /// repo.push("origin", "v1.2.4")?;
    /// # Ok(())
    /// # }
    /// ```
    fn push(&self, remote: &str, refspec: &str) -> Result<()>;

    /// Switch the working tree to `branch`
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Merge `branch` into the current branch
    fn merge(&self, branch: &str) -> Result<()>;

    /// Whether a tag named `name` already exists locally
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Short name of the checked-out branch, `None` when HEAD is detached or unborn
    fn current_branch(&self) -> Result<Option<String>>;
}
