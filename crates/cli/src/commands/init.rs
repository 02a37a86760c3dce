//! Initialize .codemap.toml configuration

use anyhow::Result;
use codemap_core::config::CONFIG_FILE_NAME;
use codemap_core::CodemapConfig;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!("⚠️  {} already exists at {:?}", CONFIG_FILE_NAME, config_path);
        return Ok(());
    }

    CodemapConfig::default().save(&config_path)?;

    println!("✅ Created {} at {:?}", CONFIG_FILE_NAME, config_path);
    println!("\nYou can now customize the configuration and run:");
    println!("  codemap structure");

    Ok(())
}
