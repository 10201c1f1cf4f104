//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the bump itself so the workflow can
//! be driven programmatically, against mock git and export backends.

use std::fs;
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, GitConfig};
use crate::domain::{BumpType, VersionPair};
use crate::error::{BumpError, Result};
use crate::export::Exporter;
use crate::git::{GitCommand, Repository};
use crate::{gradle, ui};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Requested bump strategy
    pub bump_type: BumpType,

    /// Preview mode - don't write, export or touch git
    pub dry_run: bool,
}

/// Everything a run is about to do, computed before any side effect
#[derive(Debug, Clone, PartialEq)]
pub struct BumpPlan {
    /// Absolute path of the build file
    pub file: PathBuf,
    pub previous: VersionPair,
    pub next: VersionPair,
    /// Tag to create, `None` when tagging is disabled
    pub tag: Option<String>,
    pub git_steps: Vec<GitCommand>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The build file that was rewritten
    pub file: PathBuf,

    pub previous: VersionPair,

    pub next: VersionPair,

    /// The tag that was created and pushed
    pub tag: Option<String>,

    /// Whether the source branch was merged into the release branch
    pub merged: bool,

    /// True when nothing was written, exported or committed
    pub dry_run: bool,

    /// Every warning raised while planning and checking the repository
    pub warnings: Vec<BoundaryWarning>,
}

/// The fixed version-control sequence for a bump to `version_name`.
///
/// diff, add, commit, tag, push HEAD, push tag, then checkout the release
/// branch, merge the source branch and push again.
pub fn git_steps(git: &GitConfig, file: &Path, version_name: &str) -> Vec<GitCommand> {
    let mut steps = vec![
        GitCommand::Diff(file.to_path_buf()),
        GitCommand::Add(file.to_path_buf()),
        GitCommand::Commit(git.commit_message_for(version_name)),
    ];

    let tag = git.create_tag.then(|| git.tag_for(version_name));
    if let Some(tag) = &tag {
        steps.push(GitCommand::Tag(tag.clone()));
    }

    steps.push(GitCommand::Push {
        remote: git.remote.clone(),
        refspec: "HEAD".to_string(),
    });

    if let Some(tag) = tag {
        steps.push(GitCommand::Push {
            remote: git.remote.clone(),
            refspec: tag,
        });
    }

    if git.merge_release {
        steps.push(GitCommand::Checkout(git.release_branch.clone()));
        steps.push(GitCommand::Merge(git.source_branch.clone()));
        steps.push(GitCommand::Push {
            remote: git.remote.clone(),
            refspec: "HEAD".to_string(),
        });
    }

    steps
}

/// Read the build file and compute the bump without side effects.
pub fn plan_bump(file: &Path, bump_type: BumpType, config: &Config) -> Result<BumpPlan> {
    let file = fs::canonicalize(file)?;
    let content = fs::read_to_string(&file)?;

    let previous = gradle::read_versions(&content)?;
    let next = previous.bump(bump_type)?;

    let mut warnings = Vec::new();
    if bump_type == BumpType::None {
        warnings.push(BoundaryWarning::VersionNameUnchanged {
            version_name: previous.name.clone(),
        });
    }

    let occurrences = gradle::count_occurrences(&content);
    for (field, count) in [
        ("versionCode", occurrences.version_code),
        ("versionName", occurrences.version_name),
    ] {
        if count > 1 {
            warnings.push(BoundaryWarning::RepeatedField {
                field: field.to_string(),
                occurrences: count,
            });
        }
    }

    let tag = config
        .git
        .create_tag
        .then(|| config.git.tag_for(&next.name));
    let git_steps = git_steps(&config.git, &file, &next.name);

    Ok(BumpPlan {
        file,
        previous,
        next,
        tag,
        git_steps,
        warnings,
    })
}

/// Human readable steps of a plan, for dry runs
pub fn describe_plan(plan: &BumpPlan, config: &Config) -> Vec<String> {
    let mut steps = vec![format!(
        "Write versionCode {} and versionName {} to {}",
        plan.next.code,
        plan.next.name,
        plan.file.display()
    )];

    if config.export.enabled {
        steps.push(format!(
            "Export {}={} and {}={}",
            config.export.code_key, plan.next.code, config.export.name_key, plan.next.name
        ));
    }

    steps.extend(plan.git_steps.iter().map(|step| step.to_string()));
    steps
}

/// Check the repository before anything is changed.
///
/// An existing tag is an error. Being off the source branch is only a
/// warning, which is displayed and returned.
pub fn check_repository<R>(
    plan: &BumpPlan,
    config: &Config,
    repo: &R,
) -> Result<Vec<BoundaryWarning>>
where
    R: Repository + ?Sized,
{
    if let Some(tag) = &plan.tag {
        if repo.tag_exists(tag)? {
            return Err(BumpError::config(format!(
                "Tag '{}' already exists, refusing to bump to {}",
                tag, plan.next.name
            )));
        }
    }

    let mut warnings = Vec::new();
    if config.git.merge_release {
        let branch = repo.current_branch()?;
        if branch.as_deref() != Some(config.git.source_branch.as_str()) {
            let warning = BoundaryWarning::UnexpectedBranch {
                expected: config.git.source_branch.clone(),
                actual: branch,
            };
            ui::display_boundary_warning(&warning);
            warnings.push(warning);
        }
    }

    Ok(warnings)
}

/// Apply a plan: write the file, export variables and run the git sequence.
///
/// Stops at the first failing step.
pub fn execute_plan<R, E>(
    plan: &BumpPlan,
    config: &Config,
    repo: &R,
    exporter: &E,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    E: Exporter + ?Sized,
{
    let mut warnings = plan.warnings.clone();
    warnings.extend(check_repository(plan, config, repo)?);

    gradle::write_versions_to_file(&plan.file, &plan.next)?;
    ui::display_success(&format!("Updated {}", plan.file.display()));

    if config.export.enabled {
        exporter.export(&config.export.code_key, &plan.next.code.to_string())?;
        exporter.export(&config.export.name_key, &plan.next.name)?;
        ui::display_success(&format!(
            "Exported {} and {}",
            config.export.code_key, config.export.name_key
        ));
    }

    for step in &plan.git_steps {
        if let GitCommand::Diff(_) = step {
            ui::display_info("Git diff:");
        } else {
            ui::display_status(&step.to_string());
        }
        step.apply(repo)?;
    }

    Ok(WorkflowResult {
        file: plan.file.clone(),
        previous: plan.previous.clone(),
        next: plan.next.clone(),
        tag: plan.tag.clone(),
        merged: config.git.merge_release,
        dry_run: false,
        warnings,
    })
}

/// Main bump workflow
///
/// Orchestrates the whole bump for an already located build file:
/// 1. Read and log the current versions
/// 2. Compute and log the new versions
/// 3. Write the build file
/// 4. Export the new versions
/// 5. Commit, tag, push and merge into the release branch
///
/// In dry-run mode only steps 1 and 2 run, the repository is checked without
/// being changed, and the remaining steps are printed.
pub fn run_bump_workflow<R, E>(
    args: &BumpWorkflowArgs,
    config: &Config,
    file: &Path,
    repo: &R,
    exporter: &E,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    E: Exporter + ?Sized,
{
    let plan = plan_bump(file, args.bump_type, config)?;
    report_plan(&plan);

    if args.dry_run {
        let mut warnings = plan.warnings.clone();
        warnings.extend(check_repository(&plan, config, repo)?);
        ui::display_plan(&describe_plan(&plan, config));
        return Ok(WorkflowResult {
            file: plan.file,
            previous: plan.previous,
            next: plan.next,
            tag: plan.tag,
            merged: false,
            dry_run: true,
            warnings,
        });
    }

    execute_plan(&plan, config, repo, exporter)
}

/// Print current and new versions plus any warnings
pub fn report_plan(plan: &BumpPlan) {
    ui::display_versions("Current versions:", &plan.previous);
    ui::display_versions("New versions:", &plan.next);
    for warning in &plan.warnings {
        ui::display_boundary_warning(warning);
    }
}
