//! The boundary to whatever discovers installed packages.
//!
//! A feed yields one [`RawPackage`] per installed distribution and can read
//! any file listed in that package's manifest. How packages are discovered
//! (a `site-packages` scan, a lock file, a test fixture) is up to the feed.

use std::io;
use std::path::PathBuf;

use crate::error::Result;
use crate::metadata::CoreMetadata;

/// Raw, unvalidated metadata of one installed package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPackage {
    pub name: String,
    pub version: String,
    pub classifiers: Vec<String>,
    /// Free-text `License:` field
    pub license: Option<String>,
    /// PEP 639 `License-Expression:` field
    pub license_expression: Option<String>,
    /// Requirement strings as declared (`Requires-Dist`, `requires.txt`)
    pub requirements: Vec<String>,
    pub home_page: Option<String>,
    pub author: Option<String>,
    pub maintainer: Option<String>,
    pub summary: Option<String>,
    /// Installed files, relative to `location` (or the feed's root)
    pub files: Vec<String>,
    /// Directory the package was found in, for feeds spanning several
    pub location: Option<PathBuf>,
}

impl RawPackage {
    /// Fill every metadata-derived field from a parsed core metadata
    /// document. `files` is left empty for the caller.
    pub fn from_metadata(metadata: &CoreMetadata) -> Self {
        Self {
            name: metadata.name().unwrap_or_default().to_string(),
            version: metadata.version().unwrap_or_default().to_string(),
            classifiers: metadata.classifiers(),
            license: metadata.license().map(str::to_string),
            license_expression: metadata.license_expression().map(str::to_string),
            requirements: metadata.requires_dist(),
            home_page: metadata.home_page().map(str::to_string),
            author: metadata.author().map(str::to_string),
            maintainer: metadata.maintainer().map(str::to_string),
            summary: metadata.summary().map(str::to_string),
            files: Vec::new(),
            location: None,
        }
    }
}

/// Reads files out of a package's installed payload.
pub trait ManifestReader {
    fn read(&self, package: &RawPackage, relative_path: &str) -> io::Result<Vec<u8>>;
}

pub type PackageIter<'a> = Box<dyn Iterator<Item = Result<RawPackage>> + 'a>;

/// Source of installed packages.
pub trait PackageFeed: ManifestReader {
    /// Start enumerating packages. An `Err` here, or yielded by the
    /// iterator, means the feed itself is broken.
    fn packages(&self) -> Result<PackageIter<'_>>;
}
