use indexmap::IndexSet;
use serde::Serialize;

use crate::collect::CollectOptions;
use crate::evidence::{locate_evidence, read_evidence, EvidenceFile};
use crate::feed::{ManifestReader, RawPackage};
use crate::license::{
    classifier_licenses, expression_licenses, license_field_value, resolve_licenses, LicenseSource,
    LICENSE_UNKNOWN,
};
use crate::metadata::requirement_name;
use crate::name::normalize;

/// Everything learned about one installed package. Built once, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageRecord {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized_name: Option<String>,
    version: String,
    license: Option<String>,
    license_names: IndexSet<String>,
    license_names_from_classifiers: IndexSet<String>,
    license_expression: Option<String>,
    license_names_from_expression: IndexSet<String>,
    license_files: Vec<EvidenceFile>,
    notice_files: Vec<EvidenceFile>,
    dependencies: IndexSet<String>,
    requirements: Vec<String>,
    home_page_url: Option<String>,
    author: Option<String>,
    maintainer: Option<String>,
    description: Option<String>,
}

impl PackageRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// PEP 503 name; `None` when normalization was switched off.
    pub fn normalized_name(&self) -> Option<&str> {
        self.normalized_name.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The free-text `License:` metadata field, verbatim.
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// Union of classifier and expression names, or the license field when
    /// neither yields anything.
    pub fn license_names(&self) -> &IndexSet<String> {
        &self.license_names
    }

    pub fn license_names_from_classifiers(&self) -> &IndexSet<String> {
        &self.license_names_from_classifiers
    }

    pub fn license_expression(&self) -> Option<&str> {
        self.license_expression.as_deref()
    }

    pub fn license_names_from_expression(&self) -> &IndexSet<String> {
        &self.license_names_from_expression
    }

    pub fn license_files(&self) -> &[EvidenceFile] {
        &self.license_files
    }

    pub fn notice_files(&self) -> &[EvidenceFile] {
        &self.notice_files
    }

    pub fn dependencies(&self) -> &IndexSet<String> {
        &self.dependencies
    }

    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    pub fn home_page_url(&self) -> Option<&str> {
        self.home_page_url.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn maintainer(&self) -> Option<&str> {
        self.maintainer.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_license(&self) -> bool {
        !self.license_names.is_empty()
    }

    /// License names as seen through one metadata source. Sources with
    /// nothing to offer report [`LICENSE_UNKNOWN`].
    pub fn license_names_by(&self, source: LicenseSource) -> IndexSet<String> {
        let names = match source {
            LicenseSource::Mixed => self.license_names.clone(),
            LicenseSource::Classifier => self.license_names_from_classifiers.clone(),
            LicenseSource::Expression => self.license_names_from_expression.clone(),
            LicenseSource::Meta => self.license_field_names(),
            LicenseSource::All => {
                let mut names = self.license_names.clone();
                names.extend(self.license_field_names());
                names
            }
        };

        if names.is_empty() {
            IndexSet::from([LICENSE_UNKNOWN.to_string()])
        } else {
            names
        }
    }
}

impl PackageRecord {
    fn license_field_names(&self) -> IndexSet<String> {
        self.license
            .as_deref()
            .and_then(license_field_value)
            .map(|field| IndexSet::from([field.to_string()]))
            .unwrap_or_default()
    }
}

/// Assemble the record for one raw package.
///
/// Never fails: absent metadata becomes empty fields and unreadable
/// evidence files are kept as markers.
pub fn build<R: ManifestReader + ?Sized>(
    raw: &RawPackage,
    options: &CollectOptions,
    reader: &R,
) -> PackageRecord {
    let normalized_name = options.normalize_names.then(|| normalize(&raw.name));

    let license_expression = raw
        .license_expression
        .as_deref()
        .map(str::trim)
        .filter(|expression| !expression.is_empty());
    let license_names = resolve_licenses(
        &raw.classifiers,
        raw.license.as_deref(),
        license_expression,
    );

    let candidates = locate_evidence(
        &raw.files,
        options.include_license_files,
        options.include_notice_files,
    );
    let license_files = read_evidence(reader, raw, candidates.license_files);
    let notice_files = read_evidence(reader, raw, candidates.notice_files);

    let dependencies = raw
        .requirements
        .iter()
        .filter_map(|requirement| requirement_name(requirement))
        .map(str::to_string)
        .collect();

    PackageRecord {
        name: raw.name.clone(),
        normalized_name,
        version: raw.version.clone(),
        license: raw.license.clone(),
        license_names,
        license_names_from_classifiers: classifier_licenses(&raw.classifiers),
        license_expression: license_expression.map(str::to_string),
        license_names_from_expression: license_expression
            .map(expression_licenses)
            .unwrap_or_default(),
        license_files,
        notice_files,
        dependencies,
        requirements: raw.requirements.clone(),
        home_page_url: raw.home_page.clone(),
        author: raw.author.clone(),
        maintainer: raw.maintainer.clone(),
        description: raw.summary.clone(),
    }
}
