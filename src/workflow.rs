//! Bump workflow orchestration
//!
//! Keeps the load/mutate/persist sequencing out of main.rs so the whole run
//! can be exercised against temporary files without touching process state.
//! The bump level arrives as an explicit parameter, already validated.

use std::path::PathBuf;

use crate::app_manifest::{AppManifest, CounterUpdate};
use crate::boundary::SkipWarning;
use crate::error::{BumpError, Result};
use crate::package::PackageManifest;
use crate::ui;
use crate::version::{BumpLevel, Version};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Which version component to bump
    pub level: BumpLevel,

    /// Path to the package manifest (version of record)
    pub package_path: PathBuf,

    /// Path to the app manifest (mirrored version + build counters)
    pub app_manifest_path: PathBuf,
}

/// Result of a bump workflow run
///
/// Every field is optional because each record can be skipped
/// independently; `warnings` records why anything was skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowResult {
    /// Version before the bump, if the package manifest was readable
    pub previous_version: Option<Version>,

    /// Version after the bump, if one was computed and persisted
    pub new_version: Option<Version>,

    /// Android versionCode change, if the manifest update reached it
    pub android_update: Option<CounterUpdate>,

    /// iOS buildNumber change, if the manifest update reached it
    pub ios_update: Option<CounterUpdate>,

    /// Non-fatal conditions encountered along the way
    pub warnings: Vec<SkipWarning>,
}

impl WorkflowResult {
    fn skip(&mut self, warning: SkipWarning) {
        ui::display_skip_warning(&warning);
        self.warnings.push(warning);
    }
}

/// Runs the full bump: package manifest first, then the app manifest.
///
/// A missing package manifest (or one without a readable version) means
/// there is nothing to mirror, so the app manifest is left alone too.
/// Missing or structurally malformed app manifests are skipped with a
/// warning; the package update still counts as a success.
pub fn run_bump_workflow(args: WorkflowArgs) -> Result<WorkflowResult> {
    let mut result = WorkflowResult::default();

    if !args.package_path.exists() {
        result.skip(SkipWarning::PackageMissing {
            path: args.package_path,
        });
        return Ok(result);
    }

    let mut package = PackageManifest::load(&args.package_path)?;
    let current = match package.version() {
        Ok(version) => version,
        Err(BumpError::Manifest(reason)) => {
            result.skip(SkipWarning::PackageVersionUnreadable {
                path: args.package_path,
                reason,
            });
            return Ok(result);
        }
        Err(other) => return Err(other),
    };

    ui::display_status(&format!("Applying {} bump", args.level));
    let next = current.bump(args.level);
    package.set_version(next)?;
    package.save()?;
    ui::display_success(&format!("Updated {}", args.package_path.display()));
    ui::display_change("version", &current.to_string(), &next.to_string());

    result.previous_version = Some(current);
    result.new_version = Some(next);

    update_app_manifest(&mut result, args.app_manifest_path, next)?;
    Ok(result)
}

fn update_app_manifest(
    result: &mut WorkflowResult,
    path: PathBuf,
    version: Version,
) -> Result<()> {
    if !path.exists() {
        result.skip(SkipWarning::AppManifestMissing { path });
        return Ok(());
    }

    let mut manifest = match AppManifest::load(&path) {
        Ok(manifest) => manifest,
        Err(BumpError::Json(e)) => {
            result.skip(SkipWarning::AppManifestMalformed {
                path,
                reason: e.to_string(),
            });
            return Ok(());
        }
        Err(other) => return Err(other),
    };

    // The version mirror is the first mutation, so it doubles as the
    // structure check for the nested 'app' object.
    if let Err(BumpError::Manifest(reason)) = manifest.set_version(version) {
        result.skip(SkipWarning::AppManifestMalformed { path, reason });
        return Ok(());
    }

    let android = manifest.bump_android_build()?;
    report_counter("android", "versionCode", &android, result);
    result.android_update = Some(android);

    let ios = manifest.bump_ios_build()?;
    report_counter("ios", "buildNumber", &ios, result);
    result.ios_update = Some(ios);

    manifest.save()?;
    ui::display_success(&format!("Updated {}", path.display()));
    Ok(())
}

fn report_counter(
    platform: &str,
    field: &str,
    update: &CounterUpdate,
    result: &mut WorkflowResult,
) {
    match update {
        CounterUpdate::Updated { old, new } => {
            ui::display_change(&format!("{} {}", platform, field), old, new)
        }
        CounterUpdate::PlatformAbsent => {}
        CounterUpdate::NotNumeric { value } => {
            result.skip(SkipWarning::BuildCounterUnreadable {
                platform: platform.to_string(),
                value: value.clone(),
            });
        }
    }
}
