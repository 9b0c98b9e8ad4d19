//! Parser for Python core metadata documents (`METADATA`, `PKG-INFO`).
//!
//! The format is RFC 822 style: `Key: value` headers, continuation lines
//! indented with whitespace, and an optional free-form body after the first
//! blank line.

use crate::license::LICENSE_UNKNOWN;

/// Priority of `Project-URL` labels used when `Home-page` is missing.
const HOMEPAGE_LABELS: &[&str] = &["homepage", "source", "repository", "changelog", "bug tracker"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreMetadata {
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl CoreMetadata {
    pub fn parse(content: &str) -> Self {
        let mut headers: Vec<(String, String)> = Vec::new();
        let mut lines = content.lines();
        let mut body = None;

        while let Some(line) = lines.next() {
            if line.trim().is_empty() {
                let rest: Vec<&str> = lines.by_ref().collect();
                let text = rest.join("\n");
                if !text.trim().is_empty() {
                    body = Some(text);
                }
                break;
            }

            if line.starts_with(' ') || line.starts_with('\t') {
                if let Some((_, value)) = headers.last_mut() {
                    value.push('\n');
                    value.push_str(unfold(line));
                }
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => headers.push((key.trim().to_string(), value.trim().to_string())),
                None => tracing::debug!(line, "skipping malformed metadata header"),
            }
        }

        Self { headers, body }
    }

    /// First value of a header, case-insensitive; blank and `UNKNOWN`
    /// values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).into_iter().next()
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty() && *v != LICENSE_UNKNOWN)
            .collect()
    }

    pub fn name(&self) -> Option<&str> {
        self.get("Name")
    }

    pub fn version(&self) -> Option<&str> {
        self.get("Version")
    }

    pub fn summary(&self) -> Option<&str> {
        self.get("Summary")
    }

    pub fn license(&self) -> Option<&str> {
        self.get("License")
    }

    pub fn license_expression(&self) -> Option<&str> {
        self.get("License-Expression")
    }

    pub fn classifiers(&self) -> Vec<String> {
        self.get_all("Classifier").into_iter().map(str::to_string).collect()
    }

    pub fn requires_dist(&self) -> Vec<String> {
        self.get_all("Requires-Dist").into_iter().map(str::to_string).collect()
    }

    pub fn author(&self) -> Option<&str> {
        self.get("Author").or_else(|| self.get("Author-email"))
    }

    pub fn maintainer(&self) -> Option<&str> {
        self.get("Maintainer").or_else(|| self.get("Maintainer-email"))
    }

    /// `Home-page`, or the best `Project-URL` entry.
    pub fn home_page(&self) -> Option<&str> {
        if let Some(home_page) = self.get("Home-page") {
            return Some(home_page);
        }

        let candidates: Vec<(String, &str)> = self
            .get_all("Project-URL")
            .into_iter()
            .filter_map(|entry| entry.split_once(','))
            .map(|(label, url)| (label.trim().to_lowercase(), url.trim()))
            .collect();

        HOMEPAGE_LABELS.iter().find_map(|wanted| {
            candidates
                .iter()
                .find(|(label, _)| label.as_str() == *wanted)
                .map(|(_, url)| *url)
        })
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Strip the indentation of a continuation line, including the `|` marker
/// setuptools writes in front of multi-line `License:` values.
fn unfold(line: &str) -> &str {
    let line = line.trim_start();
    let value = match line.strip_prefix('|') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    };
    value.trim_end()
}

/// The distribution name at the start of a PEP 508 requirement string,
/// e.g. `black` for `black ; extra == "dev"`.
pub fn requirement_name(requirement: &str) -> Option<&str> {
    let requirement = requirement.trim_start();
    let end = requirement
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(requirement.len());
    let name = &requirement[..end];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
