use crate::boundary::SkipWarning;
use crate::version::Version;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_skip_warning(warning: &SkipWarning) {
    println!("\x1b[33mWARNING:\x1b[0m {}", warning);
}

/// Prints an old → new change for a named field.
pub fn display_change(label: &str, old: &str, new: &str) {
    println!(
        "  {}: \x1b[31m{}\x1b[0m → \x1b[32m{}\x1b[0m",
        label, old, new
    );
}

/// Prints the final version banner plus suggested follow-up steps.
/// Suggestions only; nothing is executed on the user's behalf.
pub fn display_followup_instructions(version: Version) {
    println!(
        "\n\x1b[32m✓\x1b[0m Version bumped to \x1b[1m{}\x1b[0m\n",
        version
    );
    println!("Suggested next steps:");
    println!("  git add package.json app.json");
    println!("  git commit -m \"chore: release {}\"", version);
    println!("  git tag v{}", version);
    println!("  then trigger the platform release builds");
}
