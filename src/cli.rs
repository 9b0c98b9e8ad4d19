use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use py_license_inventory::license::LicenseSource;

#[derive(Parser)]
#[command(name = "py-license-inventory")]
#[command(about = "List installed Python packages with their licenses and license files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List installed packages with licenses and evidence files
    List {
        /// Path to site-packages directory or virtual environment
        path: Option<PathBuf>,

        /// Python interpreter whose sys.path is scanned (user and system site-packages)
        #[arg(long, value_name = "EXE", conflicts_with = "path")]
        python: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Metadata the displayed license names come from
        #[arg(long)]
        from: Option<SourceArg>,

        /// Keep package names as declared instead of PEP 503 normalized
        #[arg(long)]
        no_normalize: bool,

        /// Do not collect license files
        #[arg(long)]
        no_license_files: bool,

        /// Do not collect notice and copyright files
        #[arg(long)]
        no_notice_files: bool,
    },
    /// Add the default [tool.py-license-inventory] section to pyproject.toml
    Init,
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Mixed,
    Classifier,
    Expression,
    Meta,
    All,
}

impl From<SourceArg> for LicenseSource {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Mixed => LicenseSource::Mixed,
            SourceArg::Classifier => LicenseSource::Classifier,
            SourceArg::Expression => LicenseSource::Expression,
            SourceArg::Meta => LicenseSource::Meta,
            SourceArg::All => LicenseSource::All,
        }
    }
}
