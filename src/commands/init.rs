use anyhow::Result;
use py_license_inventory::init;

pub fn handle_init(quiet: bool) -> Result<()> {
    let result = init::generate_config();

    if result.is_ok() && !quiet {
        println!("✅ Added [tool.py-license-inventory] section to pyproject.toml");
    }

    result
}
