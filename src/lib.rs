pub mod collect;
pub mod config;
pub mod error;
pub mod evidence;
pub mod feed;
pub mod init;
pub mod license;
pub mod metadata;
pub mod name;
pub mod output;
pub mod package;
pub mod report;
pub mod site_packages;

// Re-export main types for easy access
pub use collect::{collect, CollectOptions, Collector};
pub use error::InventoryError;
pub use evidence::{locate_evidence, EvidenceContent, EvidenceFile};
pub use feed::{ManifestReader, PackageFeed, RawPackage};
pub use license::{resolve_licenses, LicenseSource};
pub use name::normalize;
pub use package::{build, PackageRecord};
pub use report::{create_report, InventoryReport, LicenseSummary};
pub use site_packages::{SearchPath, SitePackages};
