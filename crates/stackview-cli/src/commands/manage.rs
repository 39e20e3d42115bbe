use anyhow::Result;
use stackview_config::GlobalConfig;
use std::path::Path;

/// Show the effective configuration and where it came from
pub fn config(config: &GlobalConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("# Config file: {:?}", config_path);
    } else {
        println!("# Config file: {:?} (not created yet, using defaults)", config_path);
    }
    println!("# Stacks directory: {:?}\n", config.stacks_dir()?);
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
