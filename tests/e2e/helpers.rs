use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A throwaway project directory with a hand-built virtual environment.
pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_py-license-inventory").to_string();

        Self { dir, binary_path }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `.venv/lib/python3.12/site-packages`, created on first use.
    pub fn site_packages(&self) -> PathBuf {
        let path = self
            .path()
            .join(".venv")
            .join("lib")
            .join("python3.12")
            .join("site-packages");
        fs::create_dir_all(&path).expect("Failed to create site-packages");
        path
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Install a fake wheel: METADATA, RECORD and the listed payload files.
    pub fn install_wheel(&self, dist_info: &str, metadata: &str, files: &[(&str, &str)]) {
        self.install_wheel_into(&self.site_packages(), dist_info, metadata, files);
    }

    pub fn install_wheel_into(
        &self,
        site_packages: &Path,
        dist_info: &str,
        metadata: &str,
        files: &[(&str, &str)],
    ) {
        let dist_info_dir = site_packages.join(dist_info);
        fs::create_dir_all(&dist_info_dir).unwrap();
        fs::write(dist_info_dir.join("METADATA"), metadata).unwrap();

        let mut record = format!("{dist_info}/METADATA,,\n");
        for (relative, content) in files {
            let path = site_packages.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            record.push_str(&format!("{relative},,\n"));
        }
        record.push_str(&format!("{dist_info}/RECORD,,\n"));
        fs::write(dist_info_dir.join("RECORD"), record).unwrap();
    }

    /// A stand-in interpreter that reports `sys_path` as its search path.
    #[cfg(unix)]
    pub fn fake_python(&self, sys_path: &[PathBuf]) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let entries: Vec<String> = sys_path.iter().map(|p| p.display().to_string()).collect();
        let json = serde_json::to_string(&entries).unwrap();
        let python = self.path().join("fake-python");
        fs::write(&python, format!("#!/bin/sh\necho '{json}'\n")).unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
        python
    }

    pub fn run(&self, args: &[&str]) -> std::process::Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run py-license-inventory")
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args);
        if !output.status.success() {
            eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
            eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
        }
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("stdout is JSON")
    }
}
