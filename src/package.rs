use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BumpError, Result};
use crate::version::Version;

/// Typed view over the only field the bump reads.
#[derive(Debug, Deserialize)]
struct PackageView {
    version: String,
}

/// The package manifest (`package.json`).
///
/// Held as raw JSON so every field the bump does not touch survives the
/// rewrite exactly as it was, nesting and key order included.
#[derive(Debug)]
pub struct PackageManifest {
    path: PathBuf,
    root: Value,
}

impl PackageManifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// Callers should check for existence first; a missing file is a
    /// non-fatal skip for the workflow, not an error here.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let root: Value = serde_json::from_str(&text)?;
        Ok(PackageManifest {
            path: path.to_path_buf(),
            root,
        })
    }

    /// Returns the current semantic version recorded in the manifest.
    pub fn version(&self) -> Result<Version> {
        let view: PackageView = serde_json::from_value(self.root.clone())
            .map_err(|_| BumpError::manifest("missing or non-string 'version' field"))?;
        view.version
            .parse::<Version>()
            .map_err(BumpError::Manifest)
    }

    /// Overwrites the version field in place; all other fields are untouched.
    pub fn set_version(&mut self, version: Version) -> Result<()> {
        let object = self
            .root
            .as_object_mut()
            .ok_or_else(|| BumpError::manifest("package manifest root is not an object"))?;
        object.insert("version".to_string(), Value::String(version.to_string()));
        Ok(())
    }

    /// Rewrites the manifest as 2-space-indented JSON with a trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut text = serde_json::to_string_pretty(&self.root)?;
        text.push('\n');
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_with(content: &str) -> (NamedTempFile, PackageManifest) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        let manifest = PackageManifest::load(file.path()).unwrap();
        (file, manifest)
    }

    #[test]
    fn test_reads_version_field() {
        let (_file, manifest) =
            manifest_with(r#"{"name": "field-sales", "version": "1.4.2"}"#);
        assert_eq!(manifest.version().unwrap(), Version::new(1, 4, 2));
    }

    #[test]
    fn test_missing_version_field_is_an_error() {
        let (_file, manifest) = manifest_with(r#"{"name": "field-sales"}"#);
        assert!(manifest.version().is_err());
    }

    #[test]
    fn test_non_semver_version_is_an_error() {
        let (_file, manifest) = manifest_with(r#"{"version": "latest"}"#);
        assert!(manifest.version().is_err());
    }

    #[test]
    fn test_set_version_preserves_other_fields() {
        let (file, mut manifest) = manifest_with(
            r#"{"name": "field-sales", "version": "1.0.0", "scripts": {"start": "run"}}"#,
        );
        manifest.set_version(Version::new(1, 1, 0)).unwrap();
        manifest.save().unwrap();

        let written: Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(written["version"], "1.1.0");
        assert_eq!(written["name"], "field-sales");
        assert_eq!(written["scripts"]["start"], "run");
    }

    #[test]
    fn test_save_writes_indented_json_with_trailing_newline() {
        let (file, manifest) = manifest_with(r#"{"version": "0.1.0"}"#);
        manifest.save().unwrap();

        let text = fs::read_to_string(file.path()).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains("  \"version\": \"0.1.0\""));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json at all").unwrap();
        file.flush().unwrap();
        assert!(PackageManifest::load(file.path()).is_err());
    }
}
