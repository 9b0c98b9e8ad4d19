use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod classifier;
pub mod expression;
pub mod table;

pub use classifier::{classifier_licenses, license_from_classifier, LICENSE_CLASSIFIER_PREFIX};
pub use expression::{expression_licenses, parse_identifiers, split_operands};
pub use table::{canonical_name, resolve_or_verbatim};

/// Placeholder shown when a selected source has nothing to say.
pub const LICENSE_UNKNOWN: &str = "UNKNOWN";

/// Resolve every license a package declares.
///
/// The result is the union of classifier-derived and expression-derived
/// names, in first-seen order. Only when both are empty does the free-text
/// license field count, and then as a single opaque name.
pub fn resolve_licenses<S: AsRef<str>>(
    classifiers: &[S],
    license_field: Option<&str>,
    license_expression: Option<&str>,
) -> IndexSet<String> {
    let mut names = classifier_licenses(classifiers);
    if let Some(expression) = license_expression {
        names.extend(expression_licenses(expression));
    }

    if names.is_empty() {
        if let Some(field) = license_field.and_then(license_field_value) {
            names.insert(field.to_string());
        }
    }
    names
}

/// The meaningful part of a free-text `License:` field, if any.
pub fn license_field_value(field: &str) -> Option<&str> {
    let field = field.trim();
    if field.is_empty() || field == LICENSE_UNKNOWN {
        None
    } else {
        Some(field)
    }
}

/// Which metadata a presentation layer reads license names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseSource {
    /// Classifiers and expression combined, falling back to the license field
    #[default]
    Mixed,
    Classifier,
    Expression,
    /// The raw `License:` metadata field
    Meta,
    /// Everything declared: classifiers, expression and the license field
    All,
}

impl FromStr for LicenseSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mixed" => Ok(Self::Mixed),
            "classifier" => Ok(Self::Classifier),
            "expression" => Ok(Self::Expression),
            "meta" => Ok(Self::Meta),
            "all" => Ok(Self::All),
            other => Err(format!("unknown license source '{}'", other)),
        }
    }
}

impl fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mixed => "mixed",
            Self::Classifier => "classifier",
            Self::Expression => "expression",
            Self::Meta => "meta",
            Self::All => "all",
        };
        f.write_str(name)
    }
}
