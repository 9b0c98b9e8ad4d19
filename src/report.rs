use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

use crate::license::{LicenseSource, LICENSE_UNKNOWN};
use crate::package::PackageRecord;

#[derive(Debug, Serialize, Default, PartialEq)]
pub struct LicenseSummary {
    pub total_packages: usize,
    pub with_license: usize,
    pub without_license: usize,
    /// Packages per license name, most common first
    pub licenses: IndexMap<String, usize>,
    pub license_files: usize,
    pub notice_files: usize,
}

#[derive(Debug, Serialize)]
pub struct InventoryReport {
    pub generated_at: DateTime<Utc>,
    pub license_source: LicenseSource,
    pub packages: Vec<PackageRecord>,
    pub summary: LicenseSummary,
}

pub fn create_report(packages: Vec<PackageRecord>, source: LicenseSource) -> InventoryReport {
    let summary = summarize(&packages, source);
    InventoryReport {
        generated_at: Utc::now(),
        license_source: source,
        packages,
        summary,
    }
}

pub fn summarize(packages: &[PackageRecord], source: LicenseSource) -> LicenseSummary {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut with_license = 0;

    for package in packages {
        let names = package.license_names_by(source);
        if !names.contains(LICENSE_UNKNOWN) {
            with_license += 1;
        }
        for name in names {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    // Sort by count (descending), then name for a stable order
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    LicenseSummary {
        total_packages: packages.len(),
        with_license,
        without_license: packages.len() - with_license,
        licenses: counts.into_iter().collect(),
        license_files: packages.iter().map(|p| p.license_files().len()).sum(),
        notice_files: packages.iter().map(|p| p.notice_files().len()).sum(),
    }
}
