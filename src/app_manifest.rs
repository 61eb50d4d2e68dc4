use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{BumpError, Result};
use crate::version::Version;

/// Outcome of attempting to bump one platform's build counter.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterUpdate {
    /// Counter incremented; old and new rendered for reporting.
    Updated { old: String, new: String },
    /// The platform object is not present in the manifest.
    PlatformAbsent,
    /// The counter exists but is not a readable number; left unchanged.
    NotNumeric { value: String },
}

/// The app manifest (`app.json`).
///
/// Everything lives under a top-level `app` object: the mirrored version
/// string plus per-platform build counters. Android tracks an integer
/// `versionCode`; iOS tracks a string-encoded `buildNumber`. As with the
/// package manifest, the document is held raw so unrelated fields and
/// nesting survive the rewrite.
#[derive(Debug)]
pub struct AppManifest {
    path: PathBuf,
    root: Value,
}

impl AppManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let root: Value = serde_json::from_str(&text)?;
        Ok(AppManifest {
            path: path.to_path_buf(),
            root,
        })
    }

    fn app_mut(&mut self) -> Result<&mut Map<String, Value>> {
        self.root
            .get_mut("app")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| BumpError::manifest("missing 'app' object"))
    }

    /// Mirrors the already-bumped version into the manifest. The manifest's
    /// version is never incremented on its own.
    pub fn set_version(&mut self, version: Version) -> Result<()> {
        self.app_mut()?
            .insert("version".to_string(), Value::String(version.to_string()));
        Ok(())
    }

    /// Increments the Android `versionCode` by 1, independent of bump level.
    /// A missing field counts as 0, so the first bump writes 1.
    pub fn bump_android_build(&mut self) -> Result<CounterUpdate> {
        let app = self.app_mut()?;
        let android = match app.get_mut("android").and_then(Value::as_object_mut) {
            Some(android) => android,
            None => return Ok(CounterUpdate::PlatformAbsent),
        };

        let old = match android.get("versionCode") {
            None => 0,
            Some(value) => match value.as_u64() {
                Some(code) => code,
                None => {
                    return Ok(CounterUpdate::NotNumeric {
                        value: value.to_string(),
                    })
                }
            },
        };

        let new = old + 1;
        android.insert("versionCode".to_string(), Value::from(new));
        Ok(CounterUpdate::Updated {
            old: old.to_string(),
            new: new.to_string(),
        })
    }

    /// Increments the iOS `buildNumber` by 1, independent of bump level.
    ///
    /// The counter is a string-encoded integer: it is parsed, incremented
    /// numerically, and re-encoded, so "9" becomes "10". A missing field
    /// counts as "0", so the first bump writes "1".
    pub fn bump_ios_build(&mut self) -> Result<CounterUpdate> {
        let app = self.app_mut()?;
        let ios = match app.get_mut("ios").and_then(Value::as_object_mut) {
            Some(ios) => ios,
            None => return Ok(CounterUpdate::PlatformAbsent),
        };

        let old = match ios.get("buildNumber") {
            None => 0,
            Some(value) => match value.as_str().and_then(|s| s.parse::<u64>().ok()) {
                Some(number) => number,
                None => {
                    return Ok(CounterUpdate::NotNumeric {
                        value: value.to_string(),
                    })
                }
            },
        };

        let new = old + 1;
        ios.insert("buildNumber".to_string(), Value::String(new.to_string()));
        Ok(CounterUpdate::Updated {
            old: old.to_string(),
            new: new.to_string(),
        })
    }

    /// Rewrites the manifest as 2-space-indented JSON with a trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut text = serde_json::to_string_pretty(&self.root)?;
        text.push('\n');
        fs::write(&self.path, text)?;
        Ok(())
    }
}
