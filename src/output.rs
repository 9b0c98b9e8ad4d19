use crate::report::InventoryReport;

pub fn format_table_output(report: &InventoryReport, verbose: bool) -> String {
    let mut output = String::new();

    let summary = &report.summary;
    output.push_str(&format!("📦 License Inventory ({} packages)\n", summary.total_packages));
    output.push_str(&format!(
        "✅ {} with licenses  ⚠️ {} unknown  📄 {} license files  📝 {} notice files\n\n",
        summary.with_license, summary.without_license, summary.license_files, summary.notice_files
    ));

    output.push_str(&format_package_table(report, verbose));

    if !summary.licenses.is_empty() {
        output.push_str("\nLicenses:\n");
        for (name, count) in &summary.licenses {
            output.push_str(&format!("  {:>4}  {}\n", count, name));
        }
    }

    output
}

fn format_package_table(report: &InventoryReport, verbose: bool) -> String {
    let packages = &report.packages;
    if packages.is_empty() {
        return "No packages found.\n".to_string();
    }

    let mut output = String::new();

    output.push_str("┌─────────────────────┬────────────┬───────────────────────────┬───────┐\n");
    output.push_str("│ Package             │ Version    │ License                   │ Files │\n");
    output.push_str("├─────────────────────┼────────────┼───────────────────────────┼───────┤\n");

    for package in packages {
        let name = truncate(package.normalized_name().unwrap_or(package.name()), 19);
        let version = truncate(package.version(), 10);
        let licenses: Vec<String> = package
            .license_names_by(report.license_source)
            .into_iter()
            .collect();
        let license = truncate(&licenses.join("; "), 25);
        let files = package.license_files().len() + package.notice_files().len();

        output.push_str(&format!(
            "│ {:<19} │ {:<10} │ {:<25} │ {:>5} │\n",
            name, version, license, files
        ));

        if verbose {
            for evidence in package.license_files().iter().chain(package.notice_files()) {
                let marker = if evidence.is_readable() { "" } else { " (unreadable)" };
                let path = truncate(&format!("{}{}", evidence.relative_path(), marker), 66);
                output.push_str(&format!("│   {:<66} │\n", path));
            }
        }
    }

    output.push_str("└─────────────────────┴────────────┴───────────────────────────┴───────┘\n");

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}
