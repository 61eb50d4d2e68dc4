use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use app_bump::ui;
use app_bump::version::BumpLevel;
use app_bump::workflow::{self, WorkflowArgs};

#[derive(clap::Parser)]
#[command(
    name = "app-bump",
    about = "Bump the app version and platform build counters"
)]
struct Args {
    #[arg(
        help = "Version component to bump: major, minor, or patch",
        default_value = "patch"
    )]
    level: String,

    #[arg(long, help = "Path to the package manifest", default_value = "package.json")]
    package: PathBuf,

    #[arg(long, help = "Path to the app manifest", default_value = "app.json")]
    app: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validated by hand rather than via clap's value parsing so a bad
    // token exits 1 like any other failure, not clap's 2.
    let level: BumpLevel = match args.level.parse() {
        Ok(level) => level,
        Err(message) => {
            ui::display_error(&message);
            eprintln!("Usage: app-bump [major|minor|patch]");
            std::process::exit(1);
        }
    };

    let workflow_args = WorkflowArgs {
        level,
        package_path: args.package,
        app_manifest_path: args.app,
    };

    match workflow::run_bump_workflow(workflow_args) {
        Ok(result) => {
            if let Some(version) = result.new_version {
                ui::display_followup_instructions(version);
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Version bump failed: {}", e));
            std::process::exit(1);
        }
    }
}
