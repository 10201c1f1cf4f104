use crate::error::{BumpError, Result};
use git2::Repository as Git2Repo;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Repository driven through the `git` binary.
///
/// Mutating operations shell out so that the user's credentials, hooks and
/// config apply as they would on the command line. Read-only lookups go
/// through `git2`.
pub struct CliRepository {
    workdir: PathBuf,
}

impl CliRepository {
    /// Discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref())?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| BumpError::config("Cannot bump versions in a bare repository"))?
            .to_path_buf();

        log::debug!("git work tree at {}", workdir.display());
        Ok(CliRepository { workdir })
    }

    /// Root of the work tree where git commands run
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn git2(&self) -> Result<Git2Repo> {
        Ok(Git2Repo::open(&self.workdir)?)
    }

    fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> =
            args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
        let printable = format!(
            "git {}",
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );
        log::debug!("running {} in {}", printable, self.workdir.display());

        let status = Command::new("git")
            .args(&args)
            .current_dir(&self.workdir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| BumpError::command(&printable, e.to_string()))?;

        if !status.success() {
            return Err(BumpError::command(printable, status.to_string()));
        }

        Ok(())
    }
}

impl super::Repository for CliRepository {
    fn diff(&self, path: &Path) -> Result<()> {
        self.run([OsStr::new("diff"), path.as_os_str()])
    }

    fn add(&self, path: &Path) -> Result<()> {
        self.run([OsStr::new("add"), path.as_os_str()])
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(["commit", "-m", message])
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.run(["tag", name])
    }

    fn push(&self, remote: &str, refspec: &str) -> Result<()> {
        self.run(["push", remote, refspec])
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run(["checkout", branch])
    }

    fn merge(&self, branch: &str) -> Result<()> {
        self.run(["merge", branch])
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let repo = self.git2()?;
        let reference_name = format!("refs/tags/{}", name);

        let exists = match repo.find_reference(&reference_name) {
            Ok(_) => true,
            Err(e) if e.code() == git2::ErrorCode::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        Ok(exists)
    }

    fn current_branch(&self) -> Result<Option<String>> {
        let repo = self.git2()?;

        let head = match repo.head() {
            Ok(head) => head,
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }

        Ok(head.shorthand().map(|s| s.to_string()))
    }
}
