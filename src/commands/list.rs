use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::{OutputFormat, SourceArg};
use py_license_inventory::collect::{collect, CollectOptions};
use py_license_inventory::config::load_config;
use py_license_inventory::license::LicenseSource;
use py_license_inventory::output::format_table_output;
use py_license_inventory::package::PackageRecord;
use py_license_inventory::report::create_report;
use py_license_inventory::site_packages::SearchPath;

pub struct ListArgs {
    pub path: Option<PathBuf>,
    pub python: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub from: Option<SourceArg>,
    pub no_normalize: bool,
    pub no_license_files: bool,
    pub no_notice_files: bool,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    // Load configuration from pyproject.toml
    let config = load_config()?;

    // CLI flags can only switch work off; config decides otherwise
    let configured = config.collect_options();
    let options = CollectOptions {
        normalize_names: configured.normalize_names && !args.no_normalize,
        include_license_files: configured.include_license_files && !args.no_license_files,
        include_notice_files: configured.include_notice_files && !args.no_notice_files,
    };
    let source = args
        .from
        .map(LicenseSource::from)
        .unwrap_or_else(|| config.license_source());

    let feed = match &args.python {
        Some(python) => SearchPath::from_interpreter(python)?,
        None => SearchPath::discover(args.path.as_deref())?,
    };
    for root in feed.roots() {
        tracing::info!(root = %root.root().display(), "collecting installed packages");
    }

    let packages = collect(&feed, options)?
        .collect::<Result<Vec<PackageRecord>, _>>()
        .context("Failed to collect installed packages")?;

    let report = create_report(packages, source);

    // Determine output format
    let format = args.format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    });

    let output_content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Table => format_table_output(&report, args.verbose),
    };

    match args.output {
        Some(path) => fs::write(&path, output_content)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            if !args.quiet {
                println!("{}", output_content);
            }
        }
    }

    Ok(())
}
