use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions encountered while updating the version records.
/// These are reported to the user and the affected record is skipped;
/// the run still exits successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipWarning {
    /// The package manifest does not exist; nothing to bump
    PackageMissing { path: PathBuf },
    /// The package manifest has no parsable version field
    PackageVersionUnreadable { path: PathBuf, reason: String },
    /// The app manifest does not exist
    AppManifestMissing { path: PathBuf },
    /// The app manifest exists but lacks the expected nested structure
    AppManifestMalformed { path: PathBuf, reason: String },
    /// A platform build counter is not numeric; that counter is left alone
    BuildCounterUnreadable { platform: String, value: String },
}

impl fmt::Display for SkipWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipWarning::PackageMissing { path } => {
                write!(f, "No package manifest at '{}', skipping", path.display())
            }
            SkipWarning::PackageVersionUnreadable { path, reason } => {
                write!(
                    f,
                    "Cannot read version from '{}': {}",
                    path.display(),
                    reason
                )
            }
            SkipWarning::AppManifestMissing { path } => {
                write!(f, "No app manifest at '{}', skipping", path.display())
            }
            SkipWarning::AppManifestMalformed { path, reason } => {
                write!(
                    f,
                    "App manifest '{}' is malformed ({}), skipping",
                    path.display(),
                    reason
                )
            }
            SkipWarning::BuildCounterUnreadable { platform, value } => {
                write!(
                    f,
                    "{} build counter '{}' is not numeric, leaving it unchanged",
                    platform, value
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_warnings_name_the_path() {
        let warning = SkipWarning::PackageMissing {
            path: PathBuf::from("pkg/package.json"),
        };
        assert!(warning.to_string().contains("pkg/package.json"));

        let warning = SkipWarning::AppManifestMissing {
            path: PathBuf::from("app.json"),
        };
        assert!(warning.to_string().contains("app.json"));
    }

    #[test]
    fn test_malformed_warning_includes_reason() {
        let warning = SkipWarning::AppManifestMalformed {
            path: PathBuf::from("app.json"),
            reason: "missing 'app' object".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("missing 'app' object"));
        assert!(msg.contains("skipping"));
    }

    #[test]
    fn test_build_counter_warning_shows_offending_value() {
        let warning = SkipWarning::BuildCounterUnreadable {
            platform: "ios".to_string(),
            value: "beta-4".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("ios"));
        assert!(msg.contains("beta-4"));
    }
}
