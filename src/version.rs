use std::fmt;
use std::str::FromStr;

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Represents the granularity of version increment requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Computes the next version for the requested bump level.
    ///
    /// Increments the appropriate component and resets lower components to 0:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// Pure and deterministic; the receiver is not modified.
    pub fn bump(self, level: BumpLevel) -> Version {
        match level {
            BumpLevel::Major => Version::new(self.major + 1, 0, 0),
            BumpLevel::Minor => Version::new(self.major, self.minor + 1, 0),
            BumpLevel::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    /// Parses a `major.minor.patch` string into a Version.
    ///
    /// Tolerates a leading 'v' or 'V' prefix since release tags often carry
    /// one; the serialized form never does. Requires exactly three numeric
    /// components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.trim().trim_start_matches('v').trim_start_matches('V');

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(format!(
                "expected three version components (major.minor.patch), got '{}'",
                s
            ));
        }

        let component = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| format!("invalid version component '{}' in '{}'", part, s))
        };

        Ok(Version::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for BumpLevel {
    type Err = String;

    /// Accepts exactly the tokens `major`, `minor`, `patch`.
    ///
    /// Anything else is a usage error reported to the invoker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpLevel::Major),
            "minor" => Ok(BumpLevel::Minor),
            "patch" => Ok(BumpLevel::Patch),
            other => Err(format!(
                "invalid bump level '{}' (expected major, minor, or patch)",
                other
            )),
        }
    }
}
