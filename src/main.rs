use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bump_android::cli::{orchestration, BumpWorkflowArgs};
use bump_android::config;
use bump_android::export::EnvmanExporter;
use bump_android::finder;
use bump_android::git::CliRepository;
use bump_android::ui;

#[derive(clap::Parser)]
#[command(
    name = "bump-android",
    about = "Bump the versionCode and versionName of an Android build.gradle, then commit, tag and push"
)]
struct Args {
    #[arg(
        short = 't',
        long,
        env = "bump_type",
        help = "Bump strategy: major, minor, patch or none"
    )]
    bump_type: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Directory to search for the build file")]
    dir: Option<PathBuf>,

    #[arg(long, help = "Build file name to look for (default: build.gradle)")]
    file_name: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.version {
        println!("bump-android {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(dir) = args.dir {
        config.gradle.search_dir = dir;
    }
    if let Some(file_name) = args.file_name {
        config.gradle.file_name = file_name;
    }

    config.print(args.bump_type.as_deref());
    let bump_type = config.resolve_bump_type(args.bump_type.as_deref())?;

    ui::display_info(&format!("Find {} file...", config.gradle.file_name));
    let candidates =
        finder::find_build_files(&config.gradle.search_dir, &config.gradle.file_name)
            .with_context(|| format!("Failed to find `{}` file", config.gradle.file_name))?;
    let build_file = finder::locate_single(candidates, &config.gradle.file_name)?;
    ui::display_detail(&build_file.display().to_string());

    let absolute = fs::canonicalize(&build_file)
        .with_context(|| format!("Failed to resolve {}", build_file.display()))?;
    let repo_root = absolute
        .parent()
        .context("Build file has no parent directory")?;
    let repo = CliRepository::open(repo_root)?;
    let exporter = EnvmanExporter::new(config.export.program.clone());

    let workflow_args = BumpWorkflowArgs {
        bump_type,
        dry_run: args.dry_run,
    };
    let result =
        orchestration::run_bump_workflow(&workflow_args, &config, &build_file, &repo, &exporter)?;
    if result.dry_run {
        return Ok(());
    }

    ui::display_info("Summary:");
    for line in ui::format_version_change(&result.previous, &result.next) {
        ui::display_detail(&line);
    }

    match &result.tag {
        Some(tag) => ui::display_success(&format!(
            "Bumped to {} ({}) and pushed tag {}",
            result.next.name, result.next.code, tag
        )),
        None => ui::display_success(&format!(
            "Bumped to {} ({})",
            result.next.name, result.next.code
        )),
    }

    Ok(())
}
