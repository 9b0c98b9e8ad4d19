//! Package feed over a `site-packages` directory.
//!
//! Installed distributions are found through their `*.dist-info` and
//! `*.egg-info` metadata entries. Manifest paths are relative to the
//! `site-packages` root, as in a wheel's `RECORD`.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use walkdir::WalkDir;

use crate::error::{InventoryError, Result};
use crate::feed::{ManifestReader, PackageFeed, PackageIter, RawPackage};
use crate::metadata::CoreMetadata;
use crate::name::normalize;

const DIST_INFO: &str = ".dist-info";
const EGG_INFO: &str = ".egg-info";
const SYS_PATH_SCRIPT: &str = "import json, sys; print(json.dumps(sys.path))";

/// Resolve the `site-packages` directory to scan.
///
/// `path` may be the directory itself, a directory containing it, or a
/// virtual environment root. Without a path, `./.venv` is tried.
pub fn find_site_packages(path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = path {
        if path.file_name().map_or(false, |name| name == "site-packages") && path.is_dir() {
            return Ok(path.to_path_buf());
        }
        if path.join("site-packages").is_dir() {
            return Ok(path.join("site-packages"));
        }
        if let Some(site_packages) = venv_site_packages(path)? {
            return Ok(site_packages);
        }
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }
        return Err(InventoryError::SitePackagesNotFound {
            path: path.to_path_buf(),
        });
    }

    let current_dir = std::env::current_dir().map_err(|source| InventoryError::Enumerate {
        path: PathBuf::from("."),
        source,
    })?;
    let venv_path = current_dir.join(".venv");
    venv_site_packages(&venv_path)?.ok_or(InventoryError::SitePackagesNotFound { path: current_dir })
}

fn venv_site_packages(venv_path: &Path) -> Result<Option<PathBuf>> {
    // Unix-like systems
    let lib_path = venv_path.join("lib");
    if lib_path.is_dir() {
        let entries = fs::read_dir(&lib_path).map_err(|source| InventoryError::Enumerate {
            path: lib_path.clone(),
            source,
        })?;
        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("python"))
            .map(|entry| entry.path().join("site-packages"))
            .filter(|site_packages| site_packages.is_dir())
            .collect();
        candidates.sort();
        if let Some(site_packages) = candidates.into_iter().next() {
            return Ok(Some(site_packages));
        }
    }

    // Windows
    let lib_path = venv_path.join("Lib").join("site-packages");
    if lib_path.is_dir() {
        return Ok(Some(lib_path));
    }

    Ok(None)
}

/// A `site-packages` directory acting as a package feed.
#[derive(Debug, Clone)]
pub struct SitePackages {
    root: PathBuf,
}

impl SitePackages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the directory with [`find_site_packages`] and wrap it.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        find_site_packages(path).map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Metadata entries sorted by directory name, so a given environment is
    /// always walked in the same order.
    fn metadata_entries(&self) -> Result<Vec<PathBuf>> {
        let enumerate_error = |source| InventoryError::Enumerate {
            path: self.root.clone(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(enumerate_error)? {
            let entry = entry.map_err(enumerate_error)?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(DIST_INFO) || name.ends_with(EGG_INFO) {
                entries.push(entry.path());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn load(&self, entry: &Path) -> RawPackage {
        let file_name = entry
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut raw = if file_name.ends_with(DIST_INFO) {
            self.load_dist_info(entry, &file_name)
        } else if entry.is_dir() {
            self.load_egg_info_dir(entry, &file_name)
        } else {
            // A bare `*.egg-info` file is the PKG-INFO document itself.
            RawPackage::from_metadata(&read_metadata(entry))
        };

        let (name, version) = parse_name_version(&file_name);
        if raw.name.is_empty() {
            raw.name = name;
        }
        if raw.version.is_empty() {
            raw.version = version.unwrap_or_default();
        }
        raw.location = Some(self.root.clone());
        raw
    }

    fn load_dist_info(&self, dist_info: &Path, file_name: &str) -> RawPackage {
        let mut raw = RawPackage::from_metadata(&read_metadata(&dist_info.join("METADATA")));

        raw.files = match fs::read_to_string(dist_info.join("RECORD")) {
            Ok(record) => parse_record(&record),
            Err(err) => {
                tracing::debug!(%err, path = %dist_info.display(), "no RECORD, listing dist-info contents");
                list_files(dist_info, Path::new(file_name))
            }
        };
        raw
    }

    fn load_egg_info_dir(&self, egg_info: &Path, file_name: &str) -> RawPackage {
        let mut raw = RawPackage::from_metadata(&read_metadata(&egg_info.join("PKG-INFO")));

        raw.files = match fs::read_to_string(egg_info.join("installed-files.txt")) {
            Ok(listing) => listing
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| rebase(file_name, line))
                .collect(),
            Err(_) => list_files(egg_info, Path::new(file_name)),
        };

        if raw.requirements.is_empty() {
            if let Ok(requires) = fs::read_to_string(egg_info.join("requires.txt")) {
                raw.requirements = parse_requires_txt(&requires);
            }
        }
        raw
    }
}

impl ManifestReader for SitePackages {
    fn read(&self, _package: &RawPackage, relative_path: &str) -> io::Result<Vec<u8>> {
        let path = self.root.join(relative_path);
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a file", path.display()),
            ));
        }
        fs::read(path)
    }
}

impl PackageFeed for SitePackages {
    fn packages(&self) -> Result<PackageIter<'_>> {
        let entries = self.metadata_entries()?;
        tracing::debug!(root = %self.root.display(), count = entries.len(), "found package metadata entries");
        Ok(Box::new(entries.into_iter().map(move |entry| Ok(self.load(&entry)))))
    }
}

/// Several `site-packages` directories scanned in order, the way they
/// appear on `sys.path`. A distribution installed in more than one of them
/// is reported from the first only, as Python would import it.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    roots: Vec<SitePackages>,
}

impl SearchPath {
    pub fn new(roots: Vec<SitePackages>) -> Self {
        Self { roots }
    }

    /// A search path of the single directory [`find_site_packages`] picks.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        SitePackages::discover(path).map(|root| Self::new(vec![root]))
    }

    /// Every `site-packages` (or Debian `dist-packages`) directory on the
    /// interpreter's `sys.path`: the user site as well as the system one.
    pub fn from_interpreter(python: &Path) -> Result<Self> {
        let roots: Vec<SitePackages> = python_sys_path(python)?
            .into_iter()
            .filter(|entry| is_package_dir(entry))
            .map(SitePackages::new)
            .collect();
        if roots.is_empty() {
            return Err(InventoryError::SitePackagesNotFound {
                path: python.to_path_buf(),
            });
        }
        tracing::debug!(python = %python.display(), count = roots.len(), "package directories on sys.path");
        Ok(Self::new(roots))
    }

    pub fn roots(&self) -> &[SitePackages] {
        &self.roots
    }
}

impl ManifestReader for SearchPath {
    fn read(&self, package: &RawPackage, relative_path: &str) -> io::Result<Vec<u8>> {
        let root = self
            .roots
            .iter()
            .find(|root| package.location.as_deref() == Some(root.root()))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} is not on this search path", package.name),
                )
            })?;
        root.read(package, relative_path)
    }
}

impl PackageFeed for SearchPath {
    fn packages(&self) -> Result<PackageIter<'_>> {
        let mut seen = HashSet::new();
        let packages = self
            .roots
            .iter()
            .flat_map(root_packages)
            .filter(move |package| match package {
                Ok(raw) => {
                    let first = seen.insert(normalize(&raw.name));
                    if !first {
                        tracing::debug!(package = %raw.name, location = ?raw.location, "shadowed by an earlier search path entry");
                    }
                    first
                }
                Err(_) => true,
            });
        Ok(Box::new(packages))
    }
}

fn root_packages(root: &SitePackages) -> PackageIter<'_> {
    match root.packages() {
        Ok(packages) => packages,
        Err(err) => Box::new(std::iter::once(Err(err))),
    }
}

/// `sys.path` of a Python interpreter. `PYTHONPATH` and `VIRTUAL_ENV` are
/// cleared so that only the interpreter's own environment is reported.
pub fn python_sys_path(python: &Path) -> Result<Vec<PathBuf>> {
    let output = Command::new(python)
        .arg("-c")
        .arg(SYS_PATH_SCRIPT)
        .env("PYTHONPATH", "")
        .env("VIRTUAL_ENV", "")
        .output()
        .map_err(|source| InventoryError::Interpreter {
            python: python.to_path_buf(),
            source,
        })?;
    if !output.status.success() {
        return Err(InventoryError::InterpreterOutput {
            python: python.to_path_buf(),
            reason: format!("exited with {}", output.status),
        });
    }
    parse_sys_path(&output.stdout).map_err(|reason| InventoryError::InterpreterOutput {
        python: python.to_path_buf(),
        reason,
    })
}

/// JSON list printed by the interpreter; the empty entry (current
/// directory) is dropped.
fn parse_sys_path(stdout: &[u8]) -> std::result::Result<Vec<PathBuf>, String> {
    let entries: Vec<String> = serde_json::from_slice(stdout).map_err(|err| err.to_string())?;
    Ok(entries
        .into_iter()
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect())
}

fn is_package_dir(path: &Path) -> bool {
    path.file_name()
        .map_or(false, |name| name == "site-packages" || name == "dist-packages")
        && path.is_dir()
}

/// Parse a metadata file, degrading to empty metadata when it is missing or
/// unreadable.
fn read_metadata(path: &Path) -> CoreMetadata {
    match fs::read(path) {
        Ok(bytes) => CoreMetadata::parse(&String::from_utf8_lossy(&bytes)),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "package metadata unreadable");
            CoreMetadata::default()
        }
    }
}

/// `name-version.dist-info` -> (`name`, `version`). The version is split off
/// at the last `-`.
fn parse_name_version(file_name: &str) -> (String, Option<String>) {
    let name_version = match file_name.strip_suffix(EGG_INFO) {
        // egg-info names may carry a python tag: name-1.0-py3.11.egg-info
        Some(name_version) => match name_version.rsplit_once("-py") {
            Some((head, tag)) if tag.chars().next().map_or(false, |c| c.is_ascii_digit()) => head,
            _ => name_version,
        },
        None => file_name.strip_suffix(DIST_INFO).unwrap_or(file_name),
    };

    match name_version.rsplit_once('-') {
        Some((name, version)) => (name.to_string(), Some(version.to_string())),
        None => (name_version.to_string(), None),
    }
}

/// First column of each line of a wheel `RECORD` (CSV).
fn parse_record(record: &str) -> Vec<String> {
    record
        .lines()
        .filter_map(|line| {
            let path = match line.strip_prefix('"') {
                Some(quoted) => unquote_csv_field(quoted),
                None => line.split(',').next().unwrap_or_default().to_string(),
            };
            if path.is_empty() {
                None
            } else {
                Some(path)
            }
        })
        .collect()
}

/// Read a quoted CSV field (opening quote already stripped); `""` is an
/// escaped quote.
fn unquote_csv_field(quoted: &str) -> String {
    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
                field.push('"');
            } else {
                break;
            }
        } else {
            field.push(c);
        }
    }
    field
}

/// Requirement lines of an egg-info `requires.txt`. Section headers such as
/// `[socks]` are skipped; the requirements below them are kept.
fn parse_requires_txt(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('[') && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Express a path relative to the egg-info directory relative to the
/// `site-packages` root instead.
fn rebase(egg_info_name: &str, path: &str) -> String {
    let mut parts: Vec<&str> = vec![egg_info_name];
    for part in path.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." if parts.last().map_or(false, |last| *last != "..") => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts.join("/")
}

/// Every file below `dir`, as paths starting with `prefix`. Directory
/// symlinks are not followed.
fn list_files(dir: &Path, prefix: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(dir).ok()?;
            Some(prefix.join(relative).to_string_lossy().replace('\\', "/"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_parse_name_version() {
        assert_eq!(
            parse_name_version("flask_example-1.0.dist-info"),
            ("flask_example".to_string(), Some("1.0".to_string()))
        );
        assert_eq!(
            parse_name_version("six-1.16.0-py3.11.egg-info"),
            ("six".to_string(), Some("1.16.0".to_string()))
        );
        assert_eq!(parse_name_version("odd.dist-info"), ("odd".to_string(), None));
    }

    #[test]
    fn test_parse_record() {
        let record = "pkg/__init__.py,sha256=abc,10\n\"pkg/odd, name.txt\",sha256=def,3\npkg-1.0.dist-info/RECORD,,\n\n";
        assert_eq!(
            parse_record(record),
            vec!["pkg/__init__.py", "pkg/odd, name.txt", "pkg-1.0.dist-info/RECORD"]
        );
    }

    #[test]
    fn test_unquote_escaped_quote() {
        assert_eq!(unquote_csv_field("a\"\"b\",rest"), "a\"b");
    }

    #[test]
    fn test_rebase() {
        assert_eq!(rebase("six.egg-info", "../six.py"), "six.py");
        assert_eq!(rebase("six.egg-info", "PKG-INFO"), "six.egg-info/PKG-INFO");
        assert_eq!(rebase("six.egg-info", "../../../bin/six"), "../../bin/six");
    }

    #[test]
    fn test_parse_requires_txt() {
        let requires = "charset_normalizer<4\nidna\n\n[socks]\nPySocks!=1.5.7\n";
        assert_eq!(
            parse_requires_txt(requires),
            vec!["charset_normalizer<4", "idna", "PySocks!=1.5.7"]
        );
    }

    #[test]
    fn test_find_site_packages_in_venv() {
        let temp_dir = TempDir::new().unwrap();
        let site_packages = temp_dir.path().join("lib").join("python3.12").join("site-packages");
        fs::create_dir_all(&site_packages).unwrap();

        assert_eq!(find_site_packages(Some(temp_dir.path())).unwrap(), site_packages);
        assert_eq!(find_site_packages(Some(&site_packages)).unwrap(), site_packages);
    }

    #[test]
    fn test_find_site_packages_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(matches!(
            find_site_packages(Some(&missing)),
            Err(InventoryError::SitePackagesNotFound { .. })
        ));
    }

    #[test]
    fn test_dist_info_package() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            &root.join("flask_example-1.0.dist-info/METADATA"),
            "Metadata-Version: 2.1\nName: Flask_Example\nVersion: 1.0\nClassifier: License :: OSI Approved :: BSD License\nRequires-Dist: click>=8\n",
        );
        write(
            &root.join("flask_example-1.0.dist-info/RECORD"),
            "flask_example/__init__.py,,\nflask_example-1.0.dist-info/LICENSE,,\nflask_example-1.0.dist-info/METADATA,,\n",
        );
        write(&root.join("flask_example-1.0.dist-info/LICENSE"), "BSD");
        write(&root.join("flask_example/__init__.py"), "");

        let feed = SitePackages::new(root);
        let packages: Vec<RawPackage> = feed.packages().unwrap().map(|p| p.unwrap()).collect();
        assert_eq!(packages.len(), 1);

        let raw = &packages[0];
        assert_eq!(raw.name, "Flask_Example");
        assert_eq!(raw.version, "1.0");
        assert_eq!(raw.requirements, vec!["click>=8"]);
        assert_eq!(raw.files.len(), 3);
        assert_eq!(feed.read(raw, "flask_example-1.0.dist-info/LICENSE").unwrap(), b"BSD");
        assert!(feed.read(raw, "flask_example-1.0.dist-info/missing").is_err());
    }

    #[test]
    fn test_dist_info_without_record_lists_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(&root.join("bare-2.0.dist-info/METADATA"), "Name: bare\nVersion: 2.0\n");
        write(&root.join("bare-2.0.dist-info/licenses/LICENSE"), "MIT");

        let feed = SitePackages::new(root);
        let raw = feed.packages().unwrap().next().unwrap().unwrap();
        assert_eq!(
            raw.files,
            vec!["bare-2.0.dist-info/METADATA", "bare-2.0.dist-info/licenses/LICENSE"]
        );
    }

    #[test]
    fn test_missing_metadata_falls_back_to_directory_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("broken_pkg-0.3.dist-info")).unwrap();

        let feed = SitePackages::new(root);
        let raw = feed.packages().unwrap().next().unwrap().unwrap();
        assert_eq!(raw.name, "broken_pkg");
        assert_eq!(raw.version, "0.3");
        assert!(raw.classifiers.is_empty());
    }

    #[test]
    fn test_egg_info_package() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(&root.join("legacy-1.2-py3.12.egg-info/PKG-INFO"), "Name: legacy\nVersion: 1.2\nLicense: MIT\n");
        write(&root.join("legacy-1.2-py3.12.egg-info/installed-files.txt"), "../legacy/__init__.py\n../legacy/COPYING\nPKG-INFO\n");
        write(&root.join("legacy-1.2-py3.12.egg-info/requires.txt"), "six\n[test]\npytest\n");
        write(&root.join("single-0.1.egg-info"), "Name: single\nVersion: 0.1\n");

        let feed = SitePackages::new(root);
        let packages: Vec<RawPackage> = feed.packages().unwrap().map(|p| p.unwrap()).collect();
        assert_eq!(packages.len(), 2);

        let legacy = &packages[0];
        assert_eq!(legacy.name, "legacy");
        assert_eq!(legacy.license.as_deref(), Some("MIT"));
        assert_eq!(
            legacy.files,
            vec!["legacy/__init__.py", "legacy/COPYING", "legacy-1.2-py3.12.egg-info/PKG-INFO"]
        );
        assert_eq!(legacy.requirements, vec!["six", "pytest"]);

        let single = &packages[1];
        assert_eq!(single.name, "single");
        assert!(single.files.is_empty());
    }

    #[test]
    fn test_dist_info_name_keeps_py_prefix() {
        assert_eq!(
            parse_name_version("my-py2app-1.0.dist-info"),
            ("my-py2app".to_string(), Some("1.0".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_listing_does_not_follow_directory_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let dist_info = root.join("loop-1.0.dist-info");
        write(&dist_info.join("METADATA"), "Name: loop\nVersion: 1.0\n");
        write(&dist_info.join("LICENSE"), "MIT");
        std::os::unix::fs::symlink(".", dist_info.join("self")).unwrap();

        let feed = SitePackages::new(root);
        let raw = feed.packages().unwrap().next().unwrap().unwrap();
        assert_eq!(
            raw.files,
            vec!["loop-1.0.dist-info/LICENSE", "loop-1.0.dist-info/METADATA"]
        );
    }

    #[test]
    fn test_parse_sys_path() {
        let stdout = br#"["", "/usr/lib/python312.zip", "/home/u/.local/lib/python3.12/site-packages"]"#;
        assert_eq!(
            parse_sys_path(stdout).unwrap(),
            vec![
                PathBuf::from("/usr/lib/python312.zip"),
                PathBuf::from("/home/u/.local/lib/python3.12/site-packages"),
            ]
        );
        assert!(parse_sys_path(b"Traceback (most recent call last)").is_err());
    }

    fn install(root: &Path, dist_info: &str, name: &str, license: &str) {
        write(
            &root.join(dist_info).join("METADATA"),
            &format!("Name: {name}\nVersion: 1.0\n"),
        );
        write(
            &root.join(dist_info).join("RECORD"),
            &format!("{dist_info}/LICENSE,,\n"),
        );
        write(&root.join(dist_info).join("LICENSE"), license);
    }

    #[test]
    fn test_search_path_chains_roots_and_skips_shadowed() {
        let temp_dir = TempDir::new().unwrap();
        let user = temp_dir.path().join("user").join("site-packages");
        let system = temp_dir.path().join("system").join("site-packages");
        install(&user, "six-1.0.dist-info", "six", "user copy");
        install(&system, "Six-1.0.dist-info", "Six", "system copy");
        install(&system, "idna-1.0.dist-info", "idna", "idna license");

        let feed = SearchPath::new(vec![SitePackages::new(&user), SitePackages::new(&system)]);
        let packages: Vec<RawPackage> = feed.packages().unwrap().map(|p| p.unwrap()).collect();
        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["six", "idna"]);

        assert_eq!(feed.read(&packages[0], "six-1.0.dist-info/LICENSE").unwrap(), b"user copy");
        assert_eq!(
            feed.read(&packages[1], "idna-1.0.dist-info/LICENSE").unwrap(),
            b"idna license"
        );
    }

    #[test]
    fn test_search_path_reports_missing_root_and_stops() {
        let temp_dir = TempDir::new().unwrap();
        let feed = SearchPath::new(vec![SitePackages::new(temp_dir.path().join("gone"))]);
        let mut packages = feed.packages().unwrap();
        assert!(matches!(packages.next(), Some(Err(InventoryError::Enumerate { .. }))));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_interpreter_uses_reported_sys_path() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let site_packages = temp_dir.path().join("lib").join("site-packages");
        install(&site_packages, "six-1.0.dist-info", "six", "MIT");
        let stdlib = temp_dir.path().join("lib").join("python3.12");
        fs::create_dir_all(&stdlib).unwrap();

        let python = temp_dir.path().join("python");
        fs::write(
            &python,
            format!(
                "#!/bin/sh\necho '[\"\", \"{}\", \"{}\"]'\n",
                stdlib.display(),
                site_packages.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let feed = SearchPath::from_interpreter(&python).unwrap();
        assert_eq!(feed.roots().len(), 1);
        assert_eq!(feed.roots()[0].root(), site_packages.as_path());
    }

    #[test]
    fn test_from_interpreter_missing_executable() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            SearchPath::from_interpreter(&temp_dir.path().join("no-python")),
            Err(InventoryError::Interpreter { .. })
        ));
    }

    #[test]
    fn test_unreadable_root_is_a_feed_error() {
        let temp_dir = TempDir::new().unwrap();
        let feed = SitePackages::new(temp_dir.path().join("missing"));
        assert!(matches!(feed.packages(), Err(InventoryError::Enumerate { .. })));
    }
}
