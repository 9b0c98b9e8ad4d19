use anyhow::Result;
use py_license_inventory::config::{load_config_from, pyproject_path};

pub fn handle_config(show: bool, validate: bool, quiet: bool) -> Result<()> {
    if !show && !validate {
        anyhow::bail!("Use --show or --validate");
    }

    let path = pyproject_path();
    let config = match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {:#}", e);
            }
            std::process::exit(1);
        }
    };

    if show && !quiet {
        println!("# effective configuration ({})", path.display());
        println!("{}", serde_json::to_string_pretty(&config)?);
        println!("{}", serde_json::to_string_pretty(&config.collect_options())?);
    }

    if validate && !quiet {
        println!("✅ Configuration is valid");
    }

    Ok(())
}
