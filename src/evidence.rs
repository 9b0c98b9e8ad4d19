//! Locating license, notice and copyright files in a package manifest.

use glob::{MatchOptions, Pattern};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::feed::{ManifestReader, RawPackage};

/// Basename stems of license evidence; `licen[cs]e` covers both spellings.
const LICENSE_STEMS: &[&str] = &["licen[cs]e", "licen[cs]es", "copying"];

/// Copyright statements are reported alongside notices.
const NOTICE_STEMS: &[&str] = &["notice", "copyright"];

/// Extensions of code files that never count as evidence even when their
/// name matches, e.g. a `license.py` helper module.
const CODE_EXTENSIONS: &[&str] = &["py", "pyc", "pyo", "pyi", "pyd", "pyx", "so", "dll", "dylib"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

static LICENSE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| compile(LICENSE_STEMS));
static NOTICE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| compile(NOTICE_STEMS));

/// Each stem matches on its own or followed by `-`, `.` or `_` and a
/// qualifier/extension: `LICENSE`, `LICENSE.txt`, `LICENSE-MIT`.
fn compile(stems: &[&str]) -> Vec<Pattern> {
    stems
        .iter()
        .flat_map(|stem| [stem.to_string(), format!("{stem}[-._]*")])
        .map(|pattern| Pattern::new(&pattern).expect("evidence pattern is valid"))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    License,
    Notice,
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn is_code_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| CODE_EXTENSIONS.iter().any(|code| ext.eq_ignore_ascii_case(code)))
        .unwrap_or(false)
}

fn matches_any(patterns: &[Pattern], name: &str) -> bool {
    patterns.iter().any(|p| p.matches_with(name, MATCH_OPTIONS))
}

/// Classify a manifest entry by its basename alone; contents are never
/// inspected. License patterns win when a name matches both categories.
pub fn classify(path: &str) -> Option<EvidenceKind> {
    let name = basename(path);
    if name.is_empty() || is_code_file(name) {
        return None;
    }
    if matches_any(&LICENSE_PATTERNS, name) {
        Some(EvidenceKind::License)
    } else if matches_any(&NOTICE_PATTERNS, name) {
        Some(EvidenceKind::Notice)
    } else {
        None
    }
}

/// Manifest entries selected as evidence, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceCandidates {
    pub license_files: Vec<String>,
    pub notice_files: Vec<String>,
}

/// Pick every license and notice candidate out of a file manifest.
///
/// A category that is not wanted is not scanned at all and stays empty.
pub fn locate_evidence<S: AsRef<str>>(
    manifest: &[S],
    want_licenses: bool,
    want_notices: bool,
) -> EvidenceCandidates {
    let mut candidates = EvidenceCandidates::default();
    if !want_licenses && !want_notices {
        return candidates;
    }

    for path in manifest.iter().map(AsRef::as_ref) {
        match classify(path) {
            Some(EvidenceKind::License) if want_licenses => {
                candidates.license_files.push(path.to_string())
            }
            Some(EvidenceKind::Notice) if want_notices => {
                candidates.notice_files.push(path.to_string())
            }
            _ => {}
        }
    }
    candidates
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceContent {
    /// Decoded file content; invalid UTF-8 sequences are replaced.
    Text(String),
    Unreadable { reason: String },
}

/// A file offered as evidence together with what could be read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceFile {
    relative_path: String,
    content: EvidenceContent,
}

impl EvidenceFile {
    pub fn new(relative_path: impl Into<String>, content: EvidenceContent) -> Self {
        Self {
            relative_path: relative_path.into(),
            content,
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn content(&self) -> &EvidenceContent {
        &self.content
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            EvidenceContent::Text(text) => Some(text),
            EvidenceContent::Unreadable { .. } => None,
        }
    }

    pub fn is_readable(&self) -> bool {
        matches!(self.content, EvidenceContent::Text(_))
    }
}

/// Read each candidate in turn. A failed read marks that file unreadable
/// and moves on to the next one.
pub fn read_evidence<R: ManifestReader + ?Sized>(
    reader: &R,
    package: &RawPackage,
    paths: Vec<String>,
) -> Vec<EvidenceFile> {
    paths
        .into_iter()
        .map(|path| {
            let content = match reader.read(package, &path) {
                Ok(bytes) => EvidenceContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
                Err(err) => {
                    tracing::debug!(package = %package.name, path = %path, %err, "evidence file unreadable");
                    EvidenceContent::Unreadable {
                        reason: err.to_string(),
                    }
                }
            };
            EvidenceFile::new(path, content)
        })
        .collect()
}
