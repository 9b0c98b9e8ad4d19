use super::helpers::TestProject;

const FLASK_EXAMPLE: &str = "Metadata-Version: 2.1
Name: Flask_Example
Version: 1.0
Summary: An example package
Home-page: https://example.org/flask-example
Classifier: License :: OSI Approved :: BSD License
Requires-Dist: click>=8.0
";

const DUAL: &str = "Metadata-Version: 2.4
Name: dual
Version: 2.0
License-Expression: MIT OR Apache-2.0
";

fn project_with_packages() -> TestProject {
    let project = TestProject::new();
    project.install_wheel(
        "flask_example-1.0.dist-info",
        FLASK_EXAMPLE,
        &[
            ("flask_example/__init__.py", ""),
            ("flask_example-1.0.dist-info/LICENSE", "BSD 3-Clause License\n"),
            ("flask_example-1.0.dist-info/NOTICE", "Notice text\n"),
            ("flask_example-1.0.dist-info/README.md", "# readme\n"),
        ],
    );
    project.install_wheel(
        "dual-2.0.dist-info",
        DUAL,
        &[
            ("dual/__init__.py", ""),
            ("dual-2.0.dist-info/licenses/LICENSE-MIT", "MIT License\n"),
            ("dual-2.0.dist-info/licenses/LICENSE-APACHE", "Apache License\n"),
        ],
    );
    project
}

fn package<'a>(report: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    report["packages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("package {name} missing from report"))
}

#[test]
fn test_json_inventory() {
    let project = project_with_packages();
    let report = project.run_json(&["list", "--format", "json"]);

    assert_eq!(report["summary"]["total_packages"], 2);

    let flask = package(&report, "Flask_Example");
    assert_eq!(flask["normalized_name"], "flask-example");
    assert_eq!(flask["version"], "1.0");
    assert_eq!(flask["license_names_from_classifiers"][0], "BSD License");
    assert_eq!(flask["license_files"].as_array().unwrap().len(), 1);
    assert_eq!(
        flask["license_files"][0]["relative_path"],
        "flask_example-1.0.dist-info/LICENSE"
    );
    assert_eq!(flask["license_files"][0]["content"]["text"], "BSD 3-Clause License\n");
    assert_eq!(flask["notice_files"].as_array().unwrap().len(), 1);
    assert_eq!(flask["dependencies"][0], "click");
    assert_eq!(flask["home_page_url"], "https://example.org/flask-example");

    let dual = package(&report, "dual");
    assert_eq!(dual["license_names"], serde_json::json!(["MIT", "Apache-2.0"]));
    assert_eq!(dual["license_files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_evidence_flags() {
    let project = project_with_packages();
    let report = project.run_json(&["list", "--format", "json", "--no-license-files"]);

    let flask = package(&report, "Flask_Example");
    assert!(flask["license_files"].as_array().unwrap().is_empty());
    assert_eq!(flask["notice_files"].as_array().unwrap().len(), 1);

    let report = project.run_json(&["list", "--format", "json", "--no-normalize", "--no-notice-files"]);
    let flask = package(&report, "Flask_Example");
    assert!(flask.get("normalized_name").is_none());
    assert!(flask["notice_files"].as_array().unwrap().is_empty());
}

#[test]
fn test_explicit_site_packages_path() {
    let project = project_with_packages();
    let site_packages = project.site_packages();
    let report = project.run_json(&["list", site_packages.to_str().unwrap(), "--format", "json"]);
    assert_eq!(report["summary"]["total_packages"], 2);
}

#[test]
fn test_table_output() {
    let project = project_with_packages();
    let output = project.run(&["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("License Inventory (2 packages)"));
    assert!(stdout.contains("flask-example"));
    assert!(stdout.contains("BSD License"));
}

#[test]
fn test_config_from_pyproject() {
    let project = project_with_packages();
    project.write(
        "pyproject.toml",
        "[project]\nname = \"demo\"\n\n[tool.py-license-inventory]\nformat = \"json\"\nfrom = \"meta\"\ninclude_license_files = false\n",
    );

    let report = project.run_json(&["list"]);
    assert_eq!(report["license_source"], "meta");
    let flask = package(&report, "Flask_Example");
    assert!(flask["license_files"].as_array().unwrap().is_empty());
    assert_eq!(report["summary"]["licenses"]["UNKNOWN"], 2);
}

#[test]
fn test_init_and_validate() {
    let project = TestProject::new();
    project.write("pyproject.toml", "[project]\nname = \"demo\"\n");

    let init_output = project.run(&["init"]);
    assert!(init_output.status.success());
    let content = std::fs::read_to_string(project.path().join("pyproject.toml")).unwrap();
    assert!(content.contains("[tool.py-license-inventory]"));

    let validate_output = project.run(&["config", "--validate"]);
    assert!(validate_output.status.success());
    assert!(String::from_utf8_lossy(&validate_output.stdout).contains("Configuration is valid"));
}

#[test]
fn test_missing_environment_fails() {
    let project = TestProject::new();
    let output = project.run(&["list"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("site-packages"));
}

#[cfg(unix)]
#[test]
fn test_python_interpreter_search_path() {
    let project = project_with_packages();
    let user_site = project.path().join("user").join("site-packages");
    std::fs::create_dir_all(&user_site).unwrap();
    project.install_wheel_into(
        &user_site,
        "dual-3.0.dist-info",
        "Name: dual\nVersion: 3.0\nLicense-Expression: MIT\n",
        &[],
    );
    project.install_wheel_into(
        &user_site,
        "extra-0.1.dist-info",
        "Name: extra\nVersion: 0.1\nLicense: MIT\n",
        &[],
    );
    let python = project.fake_python(&[user_site, project.site_packages()]);

    let report = project.run_json(&["list", "--python", python.to_str().unwrap(), "--format", "json"]);
    assert_eq!(report["summary"]["total_packages"], 3);
    assert_eq!(package(&report, "dual")["version"], "3.0");
    assert_eq!(package(&report, "extra")["license_names"][0], "MIT");
    assert_eq!(package(&report, "Flask_Example")["license_files"].as_array().unwrap().len(), 1);
}

#[test]
fn test_all_license_source() {
    let project = TestProject::new();
    project.install_wheel(
        "mixed-1.0.dist-info",
        "Name: mixed\nVersion: 1.0\nLicense: BSD, see LICENSE\nClassifier: License :: OSI Approved :: MIT License\n",
        &[],
    );

    let report = project.run_json(&["list", "--format", "json", "--from", "all"]);
    assert_eq!(report["license_source"], "all");
    assert_eq!(report["summary"]["licenses"]["MIT"], 1);
    assert_eq!(report["summary"]["licenses"]["BSD, see LICENSE"], 1);
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let project = project_with_packages();
    let output = project.run(&["--verbose", "list", "--format", "json"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("collecting installed packages"));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["total_packages"], 2);
}
